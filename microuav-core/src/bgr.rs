use crate::error::MapError;

pub const CHANNELS: usize = 3;

pub type Bgr = [u8; CHANNELS];

/// Row-major 3-channel 8-bit image in BGR order. Used for the map, for
/// observations and for rendered frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BgrImage {
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyMap { width, height });
        }
        let expected = buffer_len(width, height);
        if data.len() != expected {
            return Err(MapError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All-black image. Zero-sized images are allowed here; they only
    /// appear as intermediate frames, never as a map.
    pub(crate) fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; buffer_len(width, height)],
        }
    }

    pub fn from_fn<F>(width: u32, height: u32, mut pixel: F) -> Result<Self, MapError>
    where
        F: FnMut(u32, u32) -> Bgr,
    {
        let mut data = Vec::with_capacity(buffer_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }
        Self::from_raw(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(rows, cols, channels)`, the array shape of the buffer.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Bgr> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut out = [0; CHANNELS];
        out.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(out)
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, value: Bgr) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&value);
    }

    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Copies columns `[x0, x1)` of rows `[y0, y1)` into a new image.
    /// Callers guarantee the range lies inside the image.
    pub(crate) fn sub_image(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> BgrImage {
        let mut out = BgrImage::zeroed(x1 - x0, y1 - y0);
        let start = x0 as usize * CHANNELS;
        let end = x1 as usize * CHANNELS;
        for (dst_y, src_y) in (y0..y1).enumerate() {
            out.row_mut(dst_y as u32)
                .copy_from_slice(&self.row(src_y)[start..end]);
        }
        out
    }

    /// Same pixels with red and blue swapped (BGR <-> RGB).
    pub fn swap_red_blue(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        out
    }

    fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * CHANNELS
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            BgrImage::from_raw(0, 4, Vec::new()),
            Err(MapError::EmptyMap {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        assert!(matches!(
            BgrImage::from_raw(2, 2, vec![0; 11]),
            Err(MapError::BufferSize {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn pixel_layout_is_row_major() {
        let image = BgrImage::from_fn(3, 2, |x, y| [x as u8, y as u8, 7]).unwrap();
        assert_eq!(image.shape(), (2, 3, 3));
        assert_eq!(image.pixel(2, 1), Some([2, 1, 7]));
        assert_eq!(&image.as_bytes()[..6], &[0, 0, 7, 1, 0, 7]);
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn sub_image_copies_the_requested_window() {
        let image = BgrImage::from_fn(4, 4, |x, y| [x as u8, y as u8, 0]).unwrap();
        let sub = image.sub_image(1, 2, 3, 4);
        assert_eq!(sub.shape(), (2, 2, 3));
        assert_eq!(sub.pixel(0, 0), Some([1, 2, 0]));
        assert_eq!(sub.pixel(1, 1), Some([2, 3, 0]));
    }

    #[test]
    fn swap_red_blue_reorders_channels() {
        let image = BgrImage::from_raw(1, 1, vec![1, 2, 3]).unwrap();
        assert_eq!(image.swap_red_blue(), vec![3, 2, 1]);
    }
}
