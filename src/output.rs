//! Light outputs
//!
//! The scheduler only knows about [`LightArray`]. Plain GPIO rows implement
//! it directly; addressable strips go through [`SmartLedsArray`].

use smart_leds::{RGB8, SmartLedsWrite};

use crate::mask::{Bitmask, LightCount};

/// Abstract light row
///
/// Implement this trait to support different hardware platforms.
pub trait LightArray {
    /// Switch light `i` on if bit `i` is set, off otherwise
    fn write(&mut self, mask: Bitmask);
}

impl<T: LightArray + ?Sized> LightArray for &mut T {
    fn write(&mut self, mask: Bitmask) {
        (**self).write(mask);
    }
}

/// Shows masks on an addressable LED strip
///
/// Lit positions get `on_color`, the rest are black. Writes are
/// fire-and-forget; driver errors are only counted.
pub struct SmartLedsArray<W> {
    writer: W,
    lights: LightCount,
    on_color: RGB8,
    failed_writes: u32,
}

impl<W> SmartLedsArray<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    pub const fn new(writer: W, lights: LightCount, on_color: RGB8) -> Self {
        Self {
            writer,
            lights,
            on_color,
            failed_writes: 0,
        }
    }

    /// Number of writes the driver rejected
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LightArray for SmartLedsArray<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn write(&mut self, mask: Bitmask) {
        let on_color = self.on_color;
        let colors = (0..self.lights.get()).map(move |index| {
            if mask & (1 << index) != 0 {
                on_color
            } else {
                RGB8::default()
            }
        });
        if self.writer.write(colors).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
        }
    }
}
