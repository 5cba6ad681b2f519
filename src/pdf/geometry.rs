/// Page dimensions in page-space units (points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

/// Which half of a two-up page a clip covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A sub-rectangle of a page, `(x0, y0)` top-left to `(x1, y1)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Pixel-space crop window inside a rendered bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        ClipRect { x0, y0, x1, y1 }
    }

    #[cfg(test)]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[cfg(test)]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Map this clip onto a bitmap of `bitmap_width` x `bitmap_height` pixels
    /// rendered from a page of size `page`.
    ///
    /// Edges are rounded independently, so two clips sharing an edge map to
    /// pixel windows that share the same column.
    pub fn to_pixel_bounds(&self, page: PageSize, bitmap_width: u32, bitmap_height: u32) -> PixelBounds {
        let edge = |v: f32, extent: f32, pixels: u32| -> u32 {
            if extent <= 0.0 {
                return 0;
            }
            let scaled = (v / extent * pixels as f32).round();
            scaled.clamp(0.0, pixels as f32) as u32
        };

        let left = edge(self.x0, page.width, bitmap_width);
        let right = edge(self.x1, page.width, bitmap_width);
        let top = edge(self.y0, page.height, bitmap_height);
        let bottom = edge(self.y1, page.height, bitmap_height);

        PixelBounds {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

/// Split a page into its left and right halves at exactly `width / 2`.
pub fn split_halves(page: PageSize) -> [(Side, ClipRect); 2] {
    let mid = page.width / 2.0;
    [
        (Side::Left, ClipRect::new(0.0, 0.0, mid, page.height)),
        (Side::Right, ClipRect::new(mid, 0.0, page.width, page.height)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_split_at_midline() {
        let page = PageSize {
            width: 800.0,
            height: 600.0,
        };
        let [(left_side, left), (right_side, right)] = split_halves(page);

        assert_eq!(left_side, Side::Left);
        assert_eq!(right_side, Side::Right);
        assert_eq!(left, ClipRect::new(0.0, 0.0, 400.0, 600.0));
        assert_eq!(right, ClipRect::new(400.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_odd_width_is_not_rounded() {
        let page = PageSize {
            width: 595.5,
            height: 842.0,
        };
        let [(_, left), (_, right)] = split_halves(page);
        assert_eq!(left.x1, 297.75);
        assert_eq!(right.x0, 297.75);
        assert_eq!(left.width(), right.width());
        assert_eq!(left.height(), 842.0);
    }

    #[test]
    fn test_pixel_bounds_tile_bitmap() {
        let page = PageSize {
            width: 800.0,
            height: 600.0,
        };
        let [(_, left), (_, right)] = split_halves(page);

        // 1667 columns: the midline falls on a fractional pixel
        let l = left.to_pixel_bounds(page, 1667, 1250);
        let r = right.to_pixel_bounds(page, 1667, 1250);

        assert_eq!(l.x, 0);
        assert_eq!(l.x + l.width, r.x);
        assert_eq!(r.x + r.width, 1667);
        assert_eq!(l.height, 1250);
        assert_eq!(r.height, 1250);
    }

    #[test]
    fn test_pixel_bounds_clamped() {
        let page = PageSize {
            width: 100.0,
            height: 100.0,
        };
        let clip = ClipRect::new(-10.0, 0.0, 150.0, 100.0);
        let bounds = clip.to_pixel_bounds(page, 200, 200);
        assert_eq!(
            bounds,
            PixelBounds {
                x: 0,
                y: 0,
                width: 200,
                height: 200
            }
        );
    }

    #[test]
    fn test_zero_sized_page() {
        let page = PageSize {
            width: 0.0,
            height: 0.0,
        };
        let [(_, left), _] = split_halves(page);
        let bounds = left.to_pixel_bounds(page, 0, 0);
        assert_eq!(bounds.width, 0);
        assert_eq!(bounds.height, 0);
    }
}
