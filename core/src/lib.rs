/*!
Logic for a 112x38 monochrome logo editor.

The grid model, image thresholder, hex-literal text codec and drag-paint
session live here; window and file handling are up to the frontends.
*/

#![no_std]

pub mod codec;
pub mod editor;
pub mod grid;
pub mod session;
pub mod threshold;

extern crate alloc;
