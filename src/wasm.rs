//! JavaScript bindings for WebGL drivers
//!
//! Matrix constructors and `multiply` return `Float64Array`s so intermediate
//! results can be composed further without losing precision. The final frame
//! matrices are returned as `Float32Array`, ready for
//! `gl.uniformMatrix4fv(location, false, matrix)`.

use wasm_bindgen::prelude::*;

use crate::chain::{FrameParams2D, FrameParams3D, TransformChain2D, TransformChain3D};
use crate::math::{Matrix2D, Matrix3D, matrix2d, matrix3d};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsError {
    JsError::new(&e.to_string())
}

fn uniform(values: &[f32]) -> js_sys::Float32Array {
    js_sys::Float32Array::from(values)
}

#[wasm_bindgen]
pub fn multiply_3d(a: &[f64], b: &[f64]) -> Result<Vec<f64>, JsError> {
    let m = matrix3d::multiply(a, b).map_err(to_js_error)?;
    Ok(m.m.to_vec())
}

#[wasm_bindgen]
pub fn identity_3d() -> Vec<f64> {
    Matrix3D::identity().m.to_vec()
}

#[wasm_bindgen]
pub fn translation_3d(tx: f64, ty: f64, tz: f64) -> Vec<f64> {
    Matrix3D::translation(tx, ty, tz).m.to_vec()
}

/// `axis` is `0` for X, `1` for Y and `2` for Z, anything else is rejected.
#[wasm_bindgen]
pub fn rotation_3d(degrees: f64, axis: u8) -> Result<Vec<f64>, JsError> {
    let m = Matrix3D::rotation_by_index(degrees, axis).map_err(to_js_error)?;
    Ok(m.m.to_vec())
}

#[wasm_bindgen]
pub fn scaling_3d(sx: f64, sy: f64, sz: f64) -> Vec<f64> {
    Matrix3D::scaling(sx, sy, sz).m.to_vec()
}

#[wasm_bindgen]
pub fn projection_3d(width: f64, height: f64, depth: f64) -> Result<Vec<f64>, JsError> {
    let m = Matrix3D::orthographic_projection(width, height, depth).map_err(to_js_error)?;
    Ok(m.m.to_vec())
}

/// Builds the model-view-projection matrix from a JSON encoded
/// `FrameParams3D`.
#[wasm_bindgen]
pub fn frame_matrix_3d(params_json: &str) -> Result<js_sys::Float32Array, JsError> {
    let params: FrameParams3D = serde_json::from_str(params_json).map_err(to_js_error)?;
    let m = params.matrix().map_err(to_js_error)?;
    Ok(uniform(&m.to_f32_array()))
}

/// Folds a JSON encoded `TransformChain3D` into one matrix.
#[wasm_bindgen]
pub fn chain_matrix_3d(chain_json: &str) -> Result<js_sys::Float32Array, JsError> {
    let chain = TransformChain3D::from_json(chain_json).map_err(to_js_error)?;
    let m = chain.build().map_err(to_js_error)?;
    Ok(uniform(&m.to_f32_array()))
}

#[wasm_bindgen]
pub fn multiply_2d(a: &[f64], b: &[f64]) -> Result<Vec<f64>, JsError> {
    let m = matrix2d::multiply(a, b).map_err(to_js_error)?;
    Ok(m.m.to_vec())
}

#[wasm_bindgen]
pub fn identity_2d() -> Vec<f64> {
    Matrix2D::identity().m.to_vec()
}

#[wasm_bindgen]
pub fn translation_2d(tx: f64, ty: f64) -> Vec<f64> {
    Matrix2D::translation(tx, ty).m.to_vec()
}

#[wasm_bindgen]
pub fn rotation_2d(degrees: f64) -> Vec<f64> {
    Matrix2D::rotation(degrees).m.to_vec()
}

#[wasm_bindgen]
pub fn scaling_2d(sx: f64, sy: f64) -> Vec<f64> {
    Matrix2D::scaling(sx, sy).m.to_vec()
}

#[wasm_bindgen]
pub fn projection_2d(width: f64, height: f64) -> Result<Vec<f64>, JsError> {
    let m = Matrix2D::orthographic_projection(width, height).map_err(to_js_error)?;
    Ok(m.m.to_vec())
}

#[wasm_bindgen]
pub fn frame_matrix_2d(params_json: &str) -> Result<js_sys::Float32Array, JsError> {
    let params: FrameParams2D = serde_json::from_str(params_json).map_err(to_js_error)?;
    let m = params.matrix().map_err(to_js_error)?;
    Ok(uniform(&m.to_f32_array()))
}

#[wasm_bindgen]
pub fn chain_matrix_2d(chain_json: &str) -> Result<js_sys::Float32Array, JsError> {
    let chain = TransformChain2D::from_json(chain_json).map_err(to_js_error)?;
    let m = chain.build().map_err(to_js_error)?;
    Ok(uniform(&m.to_f32_array()))
}
