use glam::DVec2;

/// Client-space bounding box of the clicked host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl HostRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }
}

/// Square ripple centred on the click point, in host-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn from_click(click: DVec2, host: HostRect) -> Self {
        let diameter = host.size.max_element();
        let corner = click - host.origin - DVec2::splat(diameter / 2.0);
        Self {
            diameter,
            left: corner.x,
            top: corner.y,
        }
    }

    /// Inline style declarations for the ripple span.
    pub fn style(&self) -> [(&'static str, String); 10] {
        [
            ("position", "absolute".to_string()),
            ("width", format!("{}px", self.diameter)),
            ("height", format!("{}px", self.diameter)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
            ("border-radius", "50%".to_string()),
            ("background", "rgba(255,255,255,0.5)".to_string()),
            ("transform", "scale(0)".to_string()),
            ("pointer-events", "none".to_string()),
            ("animation", "ripple 0.6s linear".to_string()),
        ]
    }
}
