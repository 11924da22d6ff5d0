/// Implemented by every warning activation sheet. The runtime queries this
/// after all sheets of a cycle have been updated.
pub trait WarningActivation {
    fn warning(&self) -> bool;
}
