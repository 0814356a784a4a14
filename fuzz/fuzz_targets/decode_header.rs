#![no_main]
use byteordered::Endianness;
use libfuzzer_sys::fuzz_target;
use nifti_header::NiftiHeader;

fuzz_target!(|data: &[u8]| {
    for &endianness in &[Endianness::Little, Endianness::Big] {
        if let Ok(header) = NiftiHeader::decode(data, endianness) {
            let _ = header.data_type();
            let _ = header.qform();
            let _ = header.sform();
            let _ = header.slice_order();
            let _ = header.xyzt_units();
        }
    }
});
