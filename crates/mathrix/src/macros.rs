#[macro_export]
/// Define an async callback for Yew components.
///
/// Every listed variable is cloned once when the callback is built and again
/// on each invocation, then moved into a task spawned with
/// `wasm_bindgen_futures::spawn_local`.
///
/// Without an event parameter:
/// ```compile_fail
/// let load_overview = async_callback!([api, overview, error_msg] {
///     match api.system_overview().await {
///         Ok(data) => overview.set(Some(data)),
///         Err(err) => error_msg.set(Some(format!("Failed to load system overview: {err}"))),
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, session, error_msg] |e: SubmitEvent| {
///     e.prevent_default();
///     match api.login(&email, &password).await {
///         Ok(participant) => session.set_participant.emit(participant),
///         Err(err) => error_msg.set(Some(login_error_message(&err).to_string())),
///     }
/// });
/// ```
macro_rules! async_callback {
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
