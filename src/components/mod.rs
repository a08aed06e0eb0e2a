//! UI Components
//!
//! Screens and board widgets.

mod delete_confirm_button;
mod item_row;
mod list_card;
mod login_form;
mod new_item_row;
mod new_list_form;
mod registration_form;
mod todo_board;
mod welcome_card;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::ItemRow;
pub use list_card::ListCard;
pub use login_form::LoginForm;
pub use new_item_row::NewItemRow;
pub use new_list_form::NewListForm;
pub use registration_form::RegistrationForm;
pub use todo_board::TodoBoard;
pub use welcome_card::WelcomeCard;

/// Blocking browser alert for the two user-facing error cases
/// (rejected login, empty item title).
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Read the current value out of the input element an event fired on.
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
