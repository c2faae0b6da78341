/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.departments, departments)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.selected_department, name;
///     model.students, Vec::new()
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests expecting a JSON body, with standard error handling.
///
/// Renders first so the shell can show the state set up before the request,
/// then sends the response event built from `$response_event`.
///
/// # Example
/// ```ignore
/// api_get!(build_url("/api/departments"), DepartmentsResponse, "Load departments",
///     expect_json: Vec<Department>
/// )
/// ```
#[macro_export]
macro_rules! api_get {
    ($url:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($url)
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
        ])
    }};
}

/// Macro for handling a response event whose failure maps to a fixed
/// user-facing message.
///
/// The technical cause is logged, the model receives the message.
///
/// # Example
/// ```ignore
/// handle_response!(model, result, LoadError::Students, {
///     on_success: |model, students| {
///         model.students = students;
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($model:expr, $result:expr, $load_error:expr, {
        on_success: |$m:ident, $data:pat_param| $body:block,
        on_error: |$em:ident, $message:ident| $error_body:block $(,)?
    }) => {{
        match $result {
            Ok($data) => {
                let $m = &mut *$model;
                $body
            }
            Err(cause) => {
                log::error!("{}: {cause}", $load_error);
                let $em = &mut *$model;
                let $message = $load_error.to_string();
                $error_body
            }
        }
        crux_core::render::render()
    }};
}
