//! Terminal setup and restoration

/// Install a panic hook that leaves the alternate screen before the panic
/// message prints, so it is not lost with the screen buffer.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}
