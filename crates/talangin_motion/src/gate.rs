//! Reduced-motion gate

use talangin_platform::{MediaQuery, Window};

/// The user's motion preference, read once per page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduce: bool,
}

impl MotionPreference {
    /// Read `prefers-reduced-motion` from the host
    pub fn detect<W: Window + ?Sized>(window: &W) -> Self {
        Self {
            reduce: window.matches_media(MediaQuery::PrefersReducedMotion),
        }
    }

    pub const fn full_motion() -> Self {
        Self { reduce: false }
    }

    pub const fn reduced() -> Self {
        Self { reduce: true }
    }

    pub fn should_reduce_motion(&self) -> bool {
        self.reduce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_core::Size;
    use talangin_platform::HeadlessPage;

    #[test]
    fn test_detect() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        assert!(!MotionPreference::detect(&page).should_reduce_motion());
        page.set_media(MediaQuery::PrefersReducedMotion, true);
        assert_eq!(MotionPreference::detect(&page), MotionPreference::reduced());
    }
}
