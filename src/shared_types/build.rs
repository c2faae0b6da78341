use anyhow::Result;
use crux_core::typegen::TypeGen;
use students_ui_core::{
    types::{Content, DepartmentSelector, SelectOption, StudentRow, StudentTable, ViewModel},
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register the view model tree to ensure all enum variants are traced
    gen.register_type::<ViewModel>()?;
    gen.register_type::<DepartmentSelector>()?;
    gen.register_type::<SelectOption>()?;
    gen.register_type::<Content>()?;
    gen.register_type::<StudentTable>()?;
    gen.register_type::<StudentRow>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
