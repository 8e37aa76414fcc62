//! Framebuffer and style types for terminal rendering.
//!
//! The framebuffer is plain data with no terminal attached, so views can
//! render into it and tests can read it back without any I/O.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when it already fits.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a cell; coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left to right, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        // u32::MAX has ten digits
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            n /= 10;
            len += 1;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        for i in (0..len).rev() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, digits[i] as char, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_at(fb: &FrameBuffer, x: u16, y: u16) -> char {
        fb.get(x, y).map(|c| c.ch).unwrap_or('?')
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'X', CellStyle::default());
        fb.put_char(0, 2, 'X', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "ABCD", CellStyle::default());
        assert_eq!(char_at(&fb, 2, 0), 'A');
        assert_eq!(char_at(&fb, 3, 0), 'B');
    }

    #[test]
    fn test_put_u32_renders_all_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(0, 0, 10_250, CellStyle::default());
        let text: String = (0..5).map(|x| char_at(&fb, x, 0)).collect();
        assert_eq!(text, "10250");

        fb.put_u32(6, 0, 0, CellStyle::default());
        assert_eq!(char_at(&fb, 6, 0), '0');
    }

    #[test]
    fn test_resize_reshapes_without_stale_reads() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(1, 1, 'Z', CellStyle::default());
        fb.resize(4, 1);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 1);
        assert_eq!(fb.get(1, 1), None);
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.fill_rect(1, 1, 3, 1, '#', CellStyle::default());
        assert_eq!(char_at(&fb, 0, 1), ' ');
        assert_eq!(char_at(&fb, 1, 1), '#');
        assert_eq!(char_at(&fb, 3, 1), '#');
        assert_eq!(char_at(&fb, 4, 1), ' ');
        assert_eq!(char_at(&fb, 1, 0), ' ');
    }
}
