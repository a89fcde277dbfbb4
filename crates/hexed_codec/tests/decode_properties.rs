//! Property tests for little-endian decoding.

use hexed_codec::{CodecError, PrimitiveDecoder, Selection};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decodes_match_std_from_le_bytes(bytes in prop::collection::vec(any::<u8>(), 8..24)) {
        let decoder = PrimitiveDecoder::from_bytes(bytes.clone());

        prop_assert_eq!(decoder.decode_i16().unwrap(), i16::from_le_bytes([bytes[0], bytes[1]]));
        prop_assert_eq!(
            decoder.decode_u32().unwrap(),
            u64::from(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        );
        let eight: [u8; 8] = bytes[..8].try_into().unwrap();
        prop_assert_eq!(decoder.decode_i64().unwrap(), i64::from_le_bytes(eight));
        prop_assert_eq!(decoder.decode_f64().unwrap().to_bits(), u64::from_le_bytes(eight));
    }

    #[test]
    fn unsigned_sixteen_masks_signed(lo in any::<u8>(), hi in any::<u8>()) {
        let decoder = PrimitiveDecoder::from_bytes(vec![lo, hi]);
        let signed = decoder.decode_i16().unwrap();
        prop_assert_eq!(decoder.decode_u16().unwrap(), (i32::from(signed) & 0xFFFF) as u16);
    }

    #[test]
    fn row_split_does_not_change_result(
        bytes in prop::collection::vec(any::<u8>(), 8..16),
        split in 0usize..8,
    ) {
        let whole = PrimitiveDecoder::from_bytes(bytes.clone());
        let selection = Selection::from_optional_rows(vec![
            Some(bytes[..split].to_vec()),
            None,
            Some(bytes[split..].to_vec()),
        ]);
        let split_decoder = PrimitiveDecoder::new(&selection);
        prop_assert_eq!(whole.decode_i64().unwrap(), split_decoder.decode_i64().unwrap());
    }

    #[test]
    fn short_selections_underflow(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let decoder = PrimitiveDecoder::from_bytes(bytes.clone());
        let is_underflow = matches!(
            decoder.decode_f64(),
            Err(CodecError::Underflow { needed: 8, .. })
        );
        prop_assert!(is_underflow);
        prop_assert_eq!(decoder.decode_i32().is_ok(), bytes.len() >= 4);
    }
}
