/// CSS `cubic-bezier()` easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier(pub f32, pub f32, pub f32, pub f32);

impl CubicBezier {
    pub const EASE_OUT_QUART: CubicBezier = CubicBezier(0.25, 1.0, 0.5, 1.0);
    pub const EASE_OUT_CUBIC: CubicBezier = CubicBezier(0.33, 1.0, 0.68, 1.0);
    pub const EASE_IN: CubicBezier = CubicBezier(0.42, 0.0, 1.0, 1.0);

    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// One keyframe animation: name, duration and curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionToken {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl MotionToken {
    /// Inline `animation` declaration, delayed by `delay_ms`.
    pub fn animation(&self, delay_ms: u32) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.keyframes,
            self.duration_ms,
            self.easing.css(),
            delay_ms
        )
    }
}

/// Presentation tokens the layout hands down to pages.
///
/// Pages read these from context; they never call back into the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTokens {
    pub content_enter: MotionToken,
    pub content_exit: MotionToken,
    pub stagger_ms: u32,
    pub heading_h1: &'static str,
    pub heading_h2: &'static str,
    pub subtitle: &'static str,
    pub gradient_primary: &'static str,
    pub gradient_soft: &'static str,
}

impl Default for PageTokens {
    fn default() -> Self {
        Self {
            content_enter: MotionToken {
                keyframes: "content-enter",
                duration_ms: 400,
                easing: CubicBezier::EASE_OUT_QUART,
            },
            content_exit: MotionToken {
                keyframes: "content-exit",
                duration_ms: 250,
                easing: CubicBezier::EASE_IN,
            },
            stagger_ms: 100,
            heading_h1: "c-heading c-heading--h1",
            heading_h2: "c-heading c-heading--h2",
            subtitle: "c-heading__subtitle",
            gradient_primary: "u-gradient--primary",
            gradient_soft: "u-gradient--soft",
        }
    }
}

impl PageTokens {
    /// Entry animation for the `index`-th block of a page.
    pub fn enter(&self, index: usize) -> String {
        self.content_enter
            .animation(self.stagger_ms.saturating_mul(index as u32))
    }

    pub fn exit(&self) -> String {
        self.content_exit.animation(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_bezier_css() {
        assert_eq!(
            CubicBezier::EASE_OUT_QUART.css(),
            "cubic-bezier(0.25, 1, 0.5, 1)"
        );
    }

    #[test]
    fn test_enter_is_staggered() {
        let tokens = PageTokens::default();
        assert_eq!(
            tokens.enter(0),
            "animation: content-enter 400ms cubic-bezier(0.25, 1, 0.5, 1) 0ms both;"
        );
        assert!(tokens.enter(3).ends_with(" 300ms both;"));
        assert!(tokens.exit().starts_with("animation: content-exit 250ms"));
    }
}
