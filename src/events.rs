/// Host lifecycle signals. Both variants resolve to the same outcome:
/// the slideshow is cancelled and the surface closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Any user activity; the screensaver must get out of the way.
    Input,
    /// Host-wide shutdown (ctrl-c or service stop).
    AbortRequested,
}
