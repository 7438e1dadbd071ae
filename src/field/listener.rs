/// EventListener
///  - [`on_action`](EventListener::on_action): receives tap events from the
///    field surface or the end icon, depending on the current mode and tap
///    target.
///  - [`on_validation`](EventListener::on_validation): receives the
///    validation result and text on every input change.
///
/// Both handlers default to no-ops; implement only the ones you need.
pub trait EventListener {
    fn on_action(&mut self, text: &str) {
        let _ = text;
    }

    fn on_validation(&mut self, is_valid: bool, text: &str) {
        let _ = (is_valid, text);
    }
}
