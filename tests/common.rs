#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub fn create_opaque_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([40, 120, 200]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub fn create_transparent_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([240, 20, 20, 90]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub fn create_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([90, 90, 30]))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

pub fn create_corrupt_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not an image at all").unwrap();
    path
}

pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
