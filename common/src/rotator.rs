//! Background image rotator
//!
//! Cycles through a fixed list on a fixed period. The rotator only counts;
//! the page owns the interval and cancels it on teardown.

use std::time::Duration;

/// Time each background stays up
pub const ROTATION_PERIOD: Duration = Duration::from_secs(30);

/// Backgrounds shared by the inner pages
pub const BACKGROUND_IMAGES: [&str; 5] = ["/1.jpg", "/11.jpg", "/111.jpg", "/1111.jpg", "/11111.jpg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRotator<'a> {
    images: &'a [&'a str],
    index: usize,
}

impl<'a> ImageRotator<'a> {
    pub fn new(images: &'a [&'a str]) -> Self {
        Self { images, index: 0 }
    }

    /// Advance one period, wrapping to the first image after the last.
    pub fn tick(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a str> {
        self.images.get(self.index).copied()
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.images.is_empty() && index == self.index
    }

    pub fn images(&self) -> &'a [&'a str] {
        self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for ImageRotator<'static> {
    fn default() -> Self {
        ImageRotator::new(&BACKGROUND_IMAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_image() {
        let rotator = ImageRotator::default();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), Some("/1.jpg"));
    }

    #[test]
    fn test_k_ticks_is_k_mod_n() {
        let n = BACKGROUND_IMAGES.len();
        for k in 0..(3 * n + 2) {
            let mut rotator = ImageRotator::default();
            for _ in 0..k {
                rotator.tick();
            }
            assert_eq!(rotator.index(), k % n);
        }
    }

    #[test]
    fn test_wraps_after_last() {
        let images = ["a", "b"];
        let mut rotator = ImageRotator::new(&images);
        rotator.tick();
        assert_eq!(rotator.current(), Some("b"));
        rotator.tick();
        assert_eq!(rotator.current(), Some("a"));
    }

    #[test]
    fn test_empty_list() {
        let mut rotator = ImageRotator::new(&[]);
        rotator.tick();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), None);
        assert!(!rotator.is_active(0));
    }

    #[test]
    fn test_single_image_stays() {
        let images = ["only"];
        let mut rotator = ImageRotator::new(&images);
        rotator.tick();
        rotator.tick();
        assert!(rotator.is_active(0));
    }

    #[test]
    fn test_period() {
        assert_eq!(ROTATION_PERIOD.as_millis(), 30_000);
    }
}
