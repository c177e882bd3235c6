/// vproj Web - WASM bindings for the multi-frame projector
///
/// Arrays cross the boundary flat: vertices as `x y z` triples, frame
/// parameters as rows of `r1 r2 r3 tx ty tz`, and matrices row-major.

use nalgebra::Matrix4;
use vproj_core::{FrameParams, ShapeError};
use wasm_bindgen::prelude::*;

fn row_major(mat: &Matrix4<f64>) -> impl Iterator<Item = f64> + '_ {
    (0..4).flat_map(move |row| (0..4).map(move |col| mat[(row, col)]))
}

fn project_flat(vertices: &[f64], params: &[f64], f: f64) -> Result<Vec<f64>, ShapeError> {
    let frames = FrameParams::batch_from_flat(params)?;
    Ok(vproj_core::rt_multiframe(vertices, &frames, f)?.to_flat())
}

fn rt_matrix_flat(params: &[f64]) -> Result<Vec<f64>, ShapeError> {
    let frames = FrameParams::batch_from_flat(params)?;
    Ok(vproj_core::rt_matrix(&frames)
        .iter()
        .flat_map(row_major)
        .collect())
}

/// Project flat vertices for every frame; returns `(frames, vertices, 2)` flattened
#[wasm_bindgen(js_name = rtMultiframe)]
pub fn rt_multiframe(vertices: &[f64], frame_params: &[f64], f: f64) -> Result<Vec<f64>, JsError> {
    Ok(project_flat(vertices, frame_params, f)?)
}

/// Rotation+translation matrices, 16 row-major values per frame
#[wasm_bindgen(js_name = rtMatrix)]
pub fn rt_matrix(frame_params: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(rt_matrix_flat(frame_params)?)
}

#[wasm_bindgen(js_name = buildProjectionMatrix)]
pub fn build_projection_matrix(f: f64) -> Vec<f64> {
    row_major(&vproj_core::build_projection_matrix(f)).collect()
}
