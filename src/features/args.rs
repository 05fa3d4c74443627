/// This a arg which gives parameters for the demo
pub trait Args {
    /// The values pushed onto the stack, in push order
    fn values(&self) -> Vec<i64>;

    /// Print without colors, if it returns true
    fn no_color(&self) -> bool;

    /// To debug mode, if it returns true
    fn debug(&self) -> bool;

    /// To quiet mode, if it return true
    ///
    /// Stack notices are dropped in quiet mode.
    fn quiet(&self) -> bool;
}
