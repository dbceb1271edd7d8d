use packer_core::{Item, Package};

use super::*;

fn package(indices: &[u32]) -> Package {
    Package::new(indices.iter().map(|&i| Item::new(i, 1.0, 1.0)).collect())
}

#[test]
fn test_format_package() {
    assert_eq!(format_package(&Package::empty()), "-");
    assert_eq!(format_package(&package(&[4])), "4");
    assert_eq!(format_package(&package(&[8, 9])), "8,9");
}

#[test]
fn test_writer_one_line_per_package() {
    let mut writer = PackageWriter::new(Vec::new());
    writer
        .write_all(&[package(&[4]), Package::empty(), package(&[2, 7])])
        .unwrap();
    writer.flush().unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(text, "4\n-\n2,7\n");
}

#[test]
fn test_custom_formatter() {
    fn bracketed(package: &Package) -> String {
        format!("[{}]", format_package(package))
    }

    let mut writer = PackageWriter::with_formatter(Vec::new(), bracketed);
    writer.write(&package(&[1, 3])).unwrap();

    assert_eq!(writer.into_inner(), b"[1,3]\n");
}

#[test]
fn test_render_packages() {
    assert_eq!(render_packages(&[]), "");
    assert_eq!(
        render_packages(&[package(&[8, 9]), Package::empty()]),
        "8,9\n-\n"
    );
}
