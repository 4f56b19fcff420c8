//! Fixed-width cells for the level and logger-name columns of a log line.
//!
//! Logger names vary wildly in length; padding short ones and cutting long ones
//! keeps the message column at a stable offset.

/// Casing applied to a cell before it is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    None,
    Uppercase,
    Lowercase,
}

impl Transform {
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Uppercase => s.to_uppercase(),
            Self::Lowercase => s.to_lowercase(),
        }
    }
}

/// Where the text sits inside a padded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// A fixed-width cell: exactly `width` characters wide after formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub alignment: Alignment,
    pub transform: Transform,
}

impl Column {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            alignment: Alignment::Left,
            transform: Transform::None,
        }
    }

    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Transforms, then truncates or pads to exactly `width` characters.
    #[must_use]
    pub fn format(&self, s: &str) -> String {
        let transformed = self.transform.apply(s);
        let len = transformed.chars().count();
        if len >= self.width {
            return transformed.chars().take(self.width).collect();
        }

        let padding = self.width - len;
        match self.alignment {
            Alignment::Left => format!("{}{}", transformed, " ".repeat(padding)),
            Alignment::Right => format!("{}{}", " ".repeat(padding), transformed),
            Alignment::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{}{}", " ".repeat(left), transformed, " ".repeat(right))
            }
        }
    }
}
