use multihash::{
    hash_types as registered_types, BufferDecoder, BufferEncoder, HashFunction, HashType,
    Multihash, MultihashError,
};
use wasm_bindgen::prelude::*;

fn to_js_error(e: MultihashError) -> JsError { JsError::new(&format!("Error: {}", e)) }

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
}

/// Names of all registered hash types, ordered by code.
#[wasm_bindgen(js_name = hashTypes)]
pub fn hash_types() -> Vec<String> {
    registered_types()
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}

#[wasm_bindgen]
pub fn encode(code: u32, digest: &[u8]) -> Result<Vec<u8>, JsError> {
    let hash_type = HashType::from_code(code as u64).map_err(to_js_error)?;
    let multihash = Multihash::wrap(hash_type, digest.to_vec());
    Ok(BufferEncoder::new().encode(&multihash))
}

#[wasm_bindgen]
pub fn decode(bytes: &[u8]) -> Result<DecodedMultihash, JsError> {
    let (multihash, consumed) = BufferDecoder::default()
        .decode(bytes)
        .map_err(to_js_error)?;
    Ok(DecodedMultihash {
        multihash,
        consumed,
    })
}

/// Hashes `data` with the named algorithm and returns the encoded multihash.
#[wasm_bindgen]
pub fn hash(name: &str, data: &[u8]) -> Result<Vec<u8>, JsError> {
    let hash_type = HashType::from_name(name).map_err(to_js_error)?;
    let multihash = HashFunction::new(hash_type).hash_bytes(data);
    Ok(multihash.to_bytes())
}

#[wasm_bindgen]
pub struct DecodedMultihash {
    multihash: Multihash,
    consumed: usize,
}

#[wasm_bindgen]
impl DecodedMultihash {
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> u32 { self.multihash.hash_type().code().value() as u32 }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String { self.multihash.hash_type().name().to_string() }

    #[wasm_bindgen(getter)]
    pub fn digest(&self) -> Vec<u8> { self.multihash.digest().to_vec() }

    /// Bytes of the input taken by this record; anything after it is left to the caller.
    #[wasm_bindgen(getter)]
    pub fn consumed(&self) -> usize { self.consumed }
}
