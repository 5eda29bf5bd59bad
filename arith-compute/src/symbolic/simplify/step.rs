/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `2-3 = -1`
    /// `2*3 = 6`
    /// `7/2 = 3`
    FoldConstants,

    /// `a+3 = 3+a`
    IntegerFirst,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubZero,

    /// `0-a = a`
    ///
    /// This does not negate `a`.
    ZeroSub,

    /// `a-a = 0`
    SubSelf,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a/a = 1`
    DivideSelf,
}
