// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Interleaved vertex attribute access through linear cursors.

use buffer_cursors::Error;
use buffer_cursors::bindings::{ArrayBufferData, ArrayBufferDataMut};
use buffer_cursors::coordinates::RangeInclusive;
use buffer_cursors::pixel_formats::f16;
use buffer_cursors::vertex_layout::{ScalarType, VertexLayout};

fn position_color() -> VertexLayout {
    VertexLayout::builder()
        .add_field("position", ScalarType::Float, 3)
        .add_field("color", ScalarType::UnsignedByte, 4)
        .build()
        .unwrap()
}

fn f32_at(bytes: &[u8], at: usize) -> f32 {
    f32::from_ne_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn position_color_offsets() {
    let layout = position_color();
    assert_eq!(layout.offset_of("position").unwrap(), 0);
    assert_eq!(layout.offset_of("color").unwrap(), 12);
    assert_eq!(layout.stride(), 16);
    assert_eq!(layout.offset_of_element("color", 2).unwrap(), 44);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn mixed_sizes() {
    let layout = VertexLayout::build([
        ("weight", ScalarType::Float, 1),
        ("bone", ScalarType::Short, 2),
        ("uv", ScalarType::Float, 2),
    ])
    .unwrap();
    let offsets: Vec<usize> = layout.fields().map(|f| layout.offset_of(f.name()).unwrap()).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
    assert_eq!(layout.stride(), 16);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn interleaved_writes() {
    let layout = position_color();
    let mut bytes = vec![0_u8; layout.stride() * 3];
    let mut vertices = ArrayBufferDataMut::new(&mut bytes, &layout, 3).unwrap();
    vertices
        .writer::<f32, 3>("position")
        .unwrap()
        .write_all([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]])
        .unwrap();
    vertices
        .writer::<u8, 4>("color")
        .unwrap()
        .write_all([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]])
        .unwrap();

    let positions: Vec<[f32; 3]> = vertices.reader::<f32, 3>("position").unwrap().collect();
    assert_eq!(positions[1], [3.0, 4.0, 5.0]);
    assert_eq!(f32_at(&bytes, 2 * 16 + 8), 8.0);
    assert_eq!(&bytes[44..48], &[9, 10, 11, 12]);
    assert_eq!(&bytes[12..16], &[1, 2, 3, 4]);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn sub_range() {
    let layout = position_color();
    let mut bytes = vec![0_u8; layout.stride() * 4];
    let mut vertices = ArrayBufferDataMut::new(&mut bytes, &layout, 4).unwrap();
    let written = vertices
        .writer_for::<u8, 4>("color", RangeInclusive::new(1, 2).unwrap())
        .unwrap()
        .fill([255; 4]);
    assert_eq!(written, 2);
    let colors: Vec<[u8; 4]> = vertices.reader::<u8, 4>("color").unwrap().collect();
    assert_eq!(colors, vec![[0; 4], [255; 4], [255; 4], [0; 4]]);
    let positions: Vec<[f32; 3]> = vertices.reader::<f32, 3>("position").unwrap().collect();
    assert!(positions.iter().all(|p| *p == [0.0; 3]));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn seeking_an_attribute() {
    let layout = position_color();
    let mut bytes = vec![0_u8; layout.stride() * 3];
    let mut vertices = ArrayBufferDataMut::new(&mut bytes, &layout, 3).unwrap();
    {
        let mut writer = vertices.writer::<f32, 3>("position").unwrap();
        writer.seek(2);
        writer.write([1.0, 2.0, 3.0]).unwrap();
        assert!(!writer.is_valid());
        assert_eq!(writer.write([0.0; 3]), Err(Error::OutOfRange { x: 3, y: 0 }));
    }
    let data = vertices.as_data();
    let mut reader = data.reader::<f32, 3>("position").unwrap();
    reader.seek(2);
    assert_eq!(reader.read().unwrap(), [1.0, 2.0, 3.0]);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn attribute_type_mismatch() {
    let layout = position_color();
    let bytes = vec![0_u8; 32];
    let vertices = ArrayBufferData::new(&bytes, &layout, 2).unwrap();
    assert_eq!(
        vertices.reader::<f32, 4>("color").unwrap_err(),
        Error::TypeMismatch {
            name: "color".to_owned(),
            actual: "unsigned byte x4".to_owned(),
            required: "float x4".to_owned(),
        }
    );
    assert!(matches!(vertices.reader::<f32, 2>("position"), Err(Error::TypeMismatch { .. })));
    assert!(matches!(vertices.reader::<i8, 4>("color"), Err(Error::TypeMismatch { .. })));
    assert!(vertices.reader::<u8, 4>("color").is_ok());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn half_and_double_attributes() {
    let layout = VertexLayout::build([("uv", ScalarType::HalfFloat, 2), ("depth", ScalarType::Double, 1)]).unwrap();
    assert_eq!(layout.stride(), 12);
    let mut bytes = vec![0_u8; 24];
    let mut vertices = ArrayBufferDataMut::new(&mut bytes, &layout, 2).unwrap();
    vertices.writer::<f16, 2>("uv").unwrap().fill([f16::from_f32(0.25), f16::ONE]);
    vertices.writer::<f64, 1>("depth").unwrap().write_all([[0.1], [0.2]]).unwrap();
    let uvs: Vec<[f16; 2]> = vertices.reader::<f16, 2>("uv").unwrap().collect();
    assert_eq!(uvs, vec![[f16::from_f32(0.25), f16::ONE]; 2]);
    let depths: Vec<[f64; 1]> = vertices.reader::<f64, 1>("depth").unwrap().collect();
    assert_eq!(depths, vec![[0.1], [0.2]]);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn layout_errors() {
    assert_eq!(
        VertexLayout::build([("p", ScalarType::Float, 3), ("p", ScalarType::Float, 3)]).unwrap_err(),
        Error::DuplicateAttribute("p".to_owned())
    );
    let layout = position_color();
    let bytes = vec![0_u8; 15];
    assert_eq!(
        ArrayBufferData::new(&bytes, &layout, 1).unwrap_err(),
        Error::BufferTooSmall { required: 16, actual: 15 }
    );
}
