//! Shares of a secret.

use math_lib::element::FieldElement;

/// A single share: the sharing polynomial's value at one abscissa.
///
/// Shares are independent values; once created they carry no reference to the polynomial
/// or to their siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    x: FieldElement,
    y: FieldElement,
}

impl Share {
    /// Creates a new share.
    pub fn new(x: FieldElement, y: FieldElement) -> Share {
        Share { x, y }
    }

    /// The abscissa this share was evaluated at.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The polynomial's value at the abscissa.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Consumes the share and returns the (x, y) coordinates in it.
    pub fn into_coordinates(self) -> (FieldElement, FieldElement) {
        (self.x, self.y)
    }
}
