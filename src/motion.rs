//! Timing for the CSS entrance animations (`reveal-*` and `letter-rise`
//! classes in `input.css`).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f64,
    pub duration: f64,
}

impl Reveal {
    pub const fn new(delay: f64, duration: f64) -> Self {
        Self { delay, duration }
    }

    /// Cards in a list come in one after another.
    pub fn staggered(index: usize) -> Self {
        Self::new(index as f64 * 0.1, 0.5)
    }

    pub fn style(&self) -> String {
        format!(
            "animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.delay, self.duration
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letter {
    pub ch: char,
    pub delay: f64,
}

/// Splits a headline into words of letters, each with its entrance delay.
pub fn headline_letters(title: &str) -> Vec<Vec<Letter>> {
    title
        .split(' ')
        .enumerate()
        .map(|(word_index, word)| {
            word.chars()
                .enumerate()
                .map(|(letter_index, ch)| Letter {
                    ch,
                    delay: 0.8 + word_index as f64 * 0.1 + letter_index as f64 * 0.03,
                })
                .collect()
        })
        .collect()
}
