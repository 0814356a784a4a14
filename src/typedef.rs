//! Standard NIfTI-1 code tables. The decoders store the raw integer
//! codes untouched; these enums are how a caller interprets them. Use
//! the accessor methods on `NiftiHeader` to obtain validated values.

use num_derive::FromPrimitive;

/// Voxel data type described by the `datatype` header field.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive)]
pub enum NiftiType {
    /// unsigned char (NIFTI_TYPE_UINT8)
    Uint8 = 2,
    /// signed short (NIFTI_TYPE_INT16)
    Int16 = 4,
    /// signed int (NIFTI_TYPE_INT32)
    Int32 = 8,
    /// 32 bit float (NIFTI_TYPE_FLOAT32)
    Float32 = 16,
    /// 64 bit complex, 2 32 bit floats (NIFTI_TYPE_COMPLEX64)
    Complex64 = 32,
    /// 64 bit float (NIFTI_TYPE_FLOAT64)
    Float64 = 64,
    /// 3 8 bit bytes (NIFTI_TYPE_RGB24)
    Rgb24 = 128,
    /// signed char (NIFTI_TYPE_INT8)
    Int8 = 256,
    /// unsigned short (NIFTI_TYPE_UINT16)
    Uint16 = 512,
    /// unsigned int (NIFTI_TYPE_UINT32)
    Uint32 = 768,
    /// signed long long (NIFTI_TYPE_INT64)
    Int64 = 1024,
    /// unsigned long long (NIFTI_TYPE_UINT64)
    Uint64 = 1280,
    /// 128 bit float (NIFTI_TYPE_FLOAT128)
    Float128 = 1536,
    /// 128 bit complex, 2 64 bit floats (NIFTI_TYPE_COMPLEX128)
    Complex128 = 1792,
    /// 256 bit complex, 2 128 bit floats (NIFTI_TYPE_COMPLEX256)
    Complex256 = 2048,
    /// 4 8 bit bytes (NIFTI_TYPE_RGBA32)
    Rgba32 = 2304,
}

impl NiftiType {
    /// Size of one element of this data type, in bytes.
    pub fn size_of(self) -> usize {
        use NiftiType::*;
        match self {
            Int8 | Uint8 => 1,
            Int16 | Uint16 => 2,
            Rgb24 => 3,
            Int32 | Uint32 | Float32 | Rgba32 => 4,
            Int64 | Uint64 | Float64 | Complex64 => 8,
            Float128 | Complex128 => 16,
            Complex256 => 32,
        }
    }
}

/// Spatial or temporal unit carried in the `xyzt_units` bit field.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive)]
pub enum Unit {
    /// NIFTI code for unspecified units
    Unknown = 0,
    /// NIFTI code for meters
    Meter = 1,
    /// NIFTI code for millimeters
    Mm = 2,
    /// NIFTI code for micrometers
    Micron = 3,
    /// NIFTI code for seconds
    Sec = 8,
    /// NIFTI code for milliseconds
    Msec = 16,
    /// NIFTI code for microseconds
    Usec = 24,
    /// NIFTI code for Hertz
    Hz = 32,
    /// NIFTI code for ppm
    Ppm = 40,
    /// NIFTI code for radians per second
    Rads = 48,
}

/// Coordinate mapping method declared by `qform_code` or `sform_code`.
/// `Unknown` (0) means the respective transform is not set.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive)]
pub enum XForm {
    /// Arbitrary coordinates (Method 1)
    Unknown = 0,
    /// Scanner-based anatomical coordinates
    ScannerAnat = 1,
    /// Coordinates aligned to another file's, or to anatomical "truth"
    AlignedAnat = 2,
    /// Coordinates aligned to the Talairach-Tournoux Atlas
    Talairach = 3,
    /// MNI 152 normalized coordinates
    Mni152 = 4,
}

/// Slice timing order carried in the `slice_code` field.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive)]
pub enum SliceOrder {
    /// NIFTI_SLICE_UNKNOWN
    Unknown = 0,
    /// NIFTI_SLICE_SEQ_INC
    SeqInc = 1,
    /// NIFTI_SLICE_SEQ_DEC
    SeqDec = 2,
    /// NIFTI_SLICE_ALT_INC
    AltInc = 3,
    /// NIFTI_SLICE_ALT_DEC
    AltDec = 4,
    /// NIFTI_SLICE_ALT_INC2
    AltInc2 = 5,
    /// NIFTI_SLICE_ALT_DEC2
    AltDec2 = 6,
}
