/// horizontal placement of each line inside the frame
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// offset from the left edge of a `writeable_area` wide box for a line `line_width` wide
    pub fn offset(&self, line_width: f32, writeable_area: f32) -> f32 {
        if line_width >= writeable_area {
            return 0.0;
        }

        match self {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => (writeable_area - line_width) / 2.0,
            TextAlignment::Right => writeable_area - line_width,
        }
    }
}
