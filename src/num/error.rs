use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("got {xs} x values but {ys} y values")]
pub struct LengthMismatch {
    pub xs: usize,
    pub ys: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("at least {required} points are required, got {actual}")]
pub struct TooFewPoints {
    pub required: usize,
    pub actual: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("points don't determine a unique solution")]
pub struct DegenerateFit;

/// Errors produced when fitting a curve through a set of points.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum FitError {
    LengthMismatch(LengthMismatch),
    TooFewPoints(TooFewPoints),
    Degenerate(DegenerateFit),
}

/// Checks that `xs` and `ys` pair up and that there are at least `required` of them.
pub(crate) fn check_points(xs: usize, ys: usize, required: usize) -> Result<usize, FitError> {
    if xs != ys {
        return Err(LengthMismatch { xs, ys }.into());
    }
    if xs < required {
        return Err(TooFewPoints {
            required,
            actual: xs,
        }
        .into());
    }
    Ok(xs)
}
