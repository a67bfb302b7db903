/// A decoded, downsized thumbnail ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
