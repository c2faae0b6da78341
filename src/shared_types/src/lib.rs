//! Generated TypeScript bindings for the students-ui core live in `generated/`
//! after a build of this crate.
