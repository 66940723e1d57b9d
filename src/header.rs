//! Header shadow driven by scroll offset.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShadow {
    Raised,
    Flat,
}

impl HeaderShadow {
    /// Strictly above the threshold raises the header; the threshold itself is flat.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderShadow::Raised
        } else {
            HeaderShadow::Flat
        }
    }

    /// Value for the `box-shadow` property
    pub fn box_shadow(&self) -> &'static str {
        match self {
            HeaderShadow::Raised => "var(--shadow-md)",
            HeaderShadow::Flat => "none",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeaderController {
    threshold: f64,
    applied: Option<HeaderShadow>,
}

impl HeaderController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            applied: None,
        }
    }

    /// Style to write for this offset, or `None` when it is already applied.
    pub fn on_scroll(&mut self, offset: f64) -> Option<HeaderShadow> {
        let shadow = HeaderShadow::for_offset(offset, self.threshold);
        if self.applied == Some(shadow) {
            return None;
        }
        self.applied = Some(shadow);
        Some(shadow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(HeaderShadow::for_offset(49.0, 50.0), HeaderShadow::Flat);
        assert_eq!(HeaderShadow::for_offset(50.0, 50.0), HeaderShadow::Flat);
        assert_eq!(HeaderShadow::for_offset(51.0, 50.0), HeaderShadow::Raised);
    }

    #[test]
    fn test_controller_writes_on_change_only() {
        let mut ctl = HeaderController::new(50.0);
        assert_eq!(ctl.on_scroll(0.0), Some(HeaderShadow::Flat));
        assert_eq!(ctl.on_scroll(10.0), None);
        assert_eq!(ctl.on_scroll(51.0), Some(HeaderShadow::Raised));
        assert_eq!(ctl.on_scroll(400.0), None);
        assert_eq!(ctl.on_scroll(49.0), Some(HeaderShadow::Flat));
        assert_eq!(ctl.on_scroll(0.0), None);
    }

    #[test]
    fn test_box_shadow_values() {
        assert_eq!(HeaderShadow::Raised.box_shadow(), "var(--shadow-md)");
        assert_eq!(HeaderShadow::Flat.box_shadow(), "none");
    }
}
