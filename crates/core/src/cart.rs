//! Cart state container.
//!
//! The cart is an ordered list of lines, at most one per food id. Updates
//! are merged rather than appended: an update for a food already in the
//! cart replaces that line's unit count, and a unit count of zero removes
//! the line. This is the same rule on every surface - the mobile client's
//! state store, the server's cart endpoints, and order placement (where a
//! batch of submitted lines is collapsed before pricing).

use serde::{Deserialize, Serialize};

use crate::types::FoodId;

/// A single cart line: a food and how many units of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The food being ordered.
    pub food_id: FoodId,
    /// Unit count. A line with zero units never rests in a cart; zero is
    /// only meaningful in an *update*, where it means "remove".
    pub unit: u32,
}

impl CartLine {
    /// Create a cart line.
    #[must_use]
    pub const fn new(food_id: FoodId, unit: u32) -> Self {
        Self { food_id, unit }
    }
}

/// An ordered collection of cart lines.
///
/// Lines keep their insertion order; merging an update in place does not
/// reorder the surviving lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Apply one update to the cart.
    ///
    /// - If a line with the same food id exists, its unit count is replaced
    ///   by the incoming one (not added to it).
    /// - A resulting unit count of zero removes the line.
    /// - Otherwise the update is appended as a new line.
    pub fn apply(&mut self, update: CartLine) {
        if let Some(pos) = self
            .lines
            .iter()
            .position(|line| line.food_id == update.food_id)
        {
            if update.unit == 0 {
                self.lines.remove(pos);
            } else if let Some(line) = self.lines.get_mut(pos) {
                line.unit = update.unit;
            }
        } else if update.unit > 0 {
            self.lines.push(update);
        }
    }

    /// Fold a batch of updates into a cart.
    ///
    /// Later updates for the same food id win; zero-unit updates drop the
    /// line. Used by order placement to collapse duplicate submissions.
    #[must_use]
    pub fn merged(updates: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for update in updates {
            cart.apply(update);
        }
        cart
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self::merged(iter)
    }
}

impl IntoIterator for Cart {
    type Item = CartLine;
    type IntoIter = std::vec::IntoIter<CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(food: i32, unit: u32) -> CartLine {
        CartLine::new(FoodId::new(food), unit)
    }

    #[test]
    fn test_first_update_appends() {
        let mut cart = Cart::new();
        cart.apply(line(1, 2));
        assert_eq!(cart.lines(), &[line(1, 2)]);
    }

    #[test]
    fn test_same_id_replaces_unit() {
        // two updates for one food id leave one line with the latest count
        let mut cart = Cart::new();
        cart.apply(line(1, 2));
        cart.apply(line(1, 5));
        assert_eq!(cart.lines(), &[line(1, 5)]);
    }

    #[test]
    fn test_zero_unit_removes_line() {
        let mut cart = Cart::new();
        cart.apply(line(1, 2));
        cart.apply(line(2, 1));
        cart.apply(line(1, 0));
        assert_eq!(cart.lines(), &[line(2, 1)]);
    }

    #[test]
    fn test_zero_unit_on_absent_line_is_a_no_op() {
        let mut cart = Cart::new();
        cart.apply(line(7, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_preserves_order_of_survivors() {
        let cart = Cart::merged([line(1, 1), line(2, 2), line(3, 3), line(2, 9)]);
        assert_eq!(cart.lines(), &[line(1, 1), line(2, 9), line(3, 3)]);
    }

    #[test]
    fn test_merge_collapses_duplicates_to_latest() {
        let cart = Cart::merged([line(4, 1), line(4, 2), line(4, 3)]);
        assert_eq!(cart.lines(), &[line(4, 3)]);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::merged([line(1, 1), line(2, 2)]);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cart = Cart::merged([line(1, 2), line(9, 4)]);
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
