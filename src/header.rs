//! This module defines the `NiftiHeader` struct and the decoders for
//! its three fixed-size blocks. Fields are named after the NIfTI-1
//! specification's header file, and every block is read field by field
//! at the exact byte offsets the specification mandates.

use crate::cursor::ByteCursor;
use crate::error::{NiftiError, Result};
use crate::typedef::{NiftiType, SliceOrder, Unit, XForm};
use byteordered::Endianness;
use num_traits::FromPrimitive;

/// Magic code for NIFTI-1 header files (extension ".hdr" plus ".img").
pub const MAGIC_CODE_NI1: &str = "ni1";
/// Magic code for full single-file NIFTI-1 files (extension ".nii").
pub const MAGIC_CODE_NIP1: &str = "n+1";

/// The header key, the first 40 bytes of a NIfTI-1 header. All of it
/// except `dim_info` is a leftover from the ANALYZE 7.5 format and is
/// unused in NIfTI-1.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderKey {
    /// Header size, must be 348
    pub sizeof_hdr: i32,
    /// Unused in NIFTI-1
    pub data_type: String,
    /// Unused in NIFTI-1
    pub db_name: String,
    /// Unused in NIFTI-1
    pub extents: i32,
    /// Unused in NIFTI-1
    pub session_error: i16,
    /// Unused in NIFTI-1
    pub regular: String,
    /// MRI slice ordering (bit-packed, kept raw)
    pub dim_info: u8,
}

/// The image dimension block, bytes 40 to 147 of a NIfTI-1 header.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDimension {
    /// Data array dimensions. `dim[0]` holds the number of meaningful
    /// dimensions, `dim[1..]` the extent of each axis.
    pub dim: [i16; 8],
    /// 1st intent parameter
    pub intent_p1: f32,
    /// 2nd intent parameter
    pub intent_p2: f32,
    /// 3rd intent parameter
    pub intent_p3: f32,
    /// NIFTI_INTENT_* code
    pub intent_code: i16,
    /// Defines the voxel data type
    pub datatype: i16,
    /// Number of bits per voxel
    pub bitpix: i16,
    /// First slice index
    pub slice_start: i16,
    /// Grid spacings
    pub pixdim: [f32; 8],
    /// Offset into the .nii file to reach the volume
    pub vox_offset: f32,
    /// Data scaling: slope
    pub scl_slope: f32,
    /// Data scaling: offset
    pub scl_inter: f32,
    /// Last slice index
    pub slice_end: i16,
    /// Slice timing order (kept raw)
    pub slice_code: u8,
    /// Units of `pixdim[1..4]` (bit-packed, kept raw)
    pub xyzt_units: u8,
    /// Max display intensity
    pub cal_max: f32,
    /// Min display intensity
    pub cal_min: f32,
    /// Time for 1 slice
    pub slice_duration: f32,
    /// Time axis shift
    pub toffset: f32,
    /// Unused in NIFTI-1
    pub glmax: i32,
    /// Unused in NIFTI-1
    pub glmin: i32,
}

/// The data history block, bytes 148 to 347 of a NIfTI-1 header.
#[derive(Debug, Clone, PartialEq)]
pub struct DataHistory {
    /// Any text you like
    pub descrip: String,
    /// Auxiliary filename
    pub aux_file: String,
    /// NIFTI_XFORM_* code, 0 means the qform is not set
    pub qform_code: i16,
    /// NIFTI_XFORM_* code, 0 means the sform is not set
    pub sform_code: i16,
    /// Quaternion b param
    pub quatern_b: f32,
    /// Quaternion c param
    pub quatern_c: f32,
    /// Quaternion d param
    pub quatern_d: f32,
    /// Quaternion x shift
    pub qoffset_x: f32,
    /// Quaternion y shift
    pub qoffset_y: f32,
    /// Quaternion z shift
    pub qoffset_z: f32,
    /// 1st row of the affine transform
    pub srow_x: [f32; 4],
    /// 2nd row of the affine transform
    pub srow_y: [f32; 4],
    /// 3rd row of the affine transform
    pub srow_z: [f32; 4],
    /// 'name' or meaning of the data
    pub intent_name: String,
    /// Magic code. Must be `"n+1"` or `"ni1"`
    pub magic: String,
}

/// The NIFTI-1 header data type, composed of its three blocks in file
/// order.
///
/// # Example
///
/// ```
/// use nifti_header::{Endianness, NiftiHeader};
/// # use nifti_header::Result;
///
/// # fn run() -> Result<()> {
/// let raw = vec![0u8; 348];
/// let header = NiftiHeader::decode(&raw, Endianness::Little)?;
/// assert_eq!(header.header_key.sizeof_hdr, 0);
/// assert_eq!(header.data_history.qform_code, 0);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NiftiHeader {
    /// The header key block
    pub header_key: HeaderKey,
    /// The image dimension block
    pub image_dimension: ImageDimension,
    /// The data history block
    pub data_history: DataHistory,
}

impl Default for HeaderKey {
    fn default() -> HeaderKey {
        HeaderKey {
            sizeof_hdr: 348,
            data_type: String::new(),
            db_name: String::new(),
            extents: 0,
            session_error: 0,
            regular: String::new(),
            dim_info: 0,
        }
    }
}

impl Default for ImageDimension {
    fn default() -> ImageDimension {
        ImageDimension {
            dim: [1, 0, 0, 0, 0, 0, 0, 0],
            intent_p1: 0.,
            intent_p2: 0.,
            intent_p3: 0.,
            intent_code: 0,
            datatype: 0,
            bitpix: 0,
            slice_start: 0,
            pixdim: [0.; 8],
            vox_offset: 352.,
            scl_slope: 0.,
            scl_inter: 0.,
            slice_end: 0,
            slice_code: 0,
            xyzt_units: 0,
            cal_max: 0.,
            cal_min: 0.,
            slice_duration: 0.,
            toffset: 0.,
            glmax: 0,
            glmin: 0,
        }
    }
}

impl Default for DataHistory {
    fn default() -> DataHistory {
        DataHistory {
            descrip: String::new(),
            aux_file: String::new(),
            qform_code: 0,
            sform_code: 0,
            quatern_b: 0.,
            quatern_c: 0.,
            quatern_d: 0.,
            qoffset_x: 0.,
            qoffset_y: 0.,
            qoffset_z: 0.,
            srow_x: [0.; 4],
            srow_y: [0.; 4],
            srow_z: [0.; 4],
            intent_name: String::new(),
            magic: MAGIC_CODE_NIP1.to_string(),
        }
    }
}

impl Default for NiftiHeader {
    fn default() -> NiftiHeader {
        NiftiHeader {
            header_key: HeaderKey::default(),
            image_dimension: ImageDimension::default(),
            data_history: DataHistory::default(),
        }
    }
}

impl HeaderKey {
    /// Decode the header key block, 40 bytes.
    ///
    /// The header key is always the first block, so the cursor is
    /// rewound to offset 0 before reading.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<HeaderKey> {
        cursor.rewind();
        let mut h = HeaderKey::default();
        h.sizeof_hdr = cursor.read_i32()?;
        h.data_type = cursor.read_string(10)?;
        h.db_name = cursor.read_string(18)?;
        h.extents = cursor.read_i32()?;
        h.session_error = cursor.read_i16()?;
        h.regular = cursor.read_string(1)?;
        h.dim_info = cursor.read_u8()?;
        Ok(h)
    }
}

impl ImageDimension {
    /// Decode the image dimension block, 108 bytes starting at offset
    /// 40. The cursor must sit right after a decoded header key.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<ImageDimension> {
        let mut h = ImageDimension::default();
        cursor.read_i16_into(&mut h.dim)?;
        h.intent_p1 = cursor.read_f32()?;
        h.intent_p2 = cursor.read_f32()?;
        h.intent_p3 = cursor.read_f32()?;
        h.intent_code = cursor.read_i16()?;
        h.datatype = cursor.read_i16()?;
        h.bitpix = cursor.read_i16()?;
        h.slice_start = cursor.read_i16()?;
        cursor.read_f32_into(&mut h.pixdim)?;
        h.vox_offset = cursor.read_f32()?;
        h.scl_slope = cursor.read_f32()?;
        h.scl_inter = cursor.read_f32()?;
        h.slice_end = cursor.read_i16()?;
        h.slice_code = cursor.read_u8()?;
        h.xyzt_units = cursor.read_u8()?;
        h.cal_max = cursor.read_f32()?;
        h.cal_min = cursor.read_f32()?;
        h.slice_duration = cursor.read_f32()?;
        h.toffset = cursor.read_f32()?;
        h.glmax = cursor.read_i32()?;
        h.glmin = cursor.read_i32()?;
        Ok(h)
    }
}

impl DataHistory {
    /// Decode the data history block, 200 bytes starting at offset
    /// 148. The cursor must sit right after a decoded image dimension
    /// block.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<DataHistory> {
        let mut h = DataHistory::default();
        h.descrip = cursor.read_string(80)?;
        h.aux_file = cursor.read_string(24)?;
        h.qform_code = cursor.read_i16()?;
        h.sform_code = cursor.read_i16()?;
        h.quatern_b = cursor.read_f32()?;
        h.quatern_c = cursor.read_f32()?;
        h.quatern_d = cursor.read_f32()?;
        h.qoffset_x = cursor.read_f32()?;
        h.qoffset_y = cursor.read_f32()?;
        h.qoffset_z = cursor.read_f32()?;
        cursor.read_f32_into(&mut h.srow_x)?;
        cursor.read_f32_into(&mut h.srow_y)?;
        cursor.read_f32_into(&mut h.srow_z)?;
        h.intent_name = cursor.read_string(16)?;
        h.magic = cursor.read_string(4)?;
        Ok(h)
    }

    /// Whether the magic code marks this as a NIfTI-1 header,
    /// single-file or header/image pair.
    pub fn is_nifti_magic(&self) -> bool {
        self.magic == MAGIC_CODE_NIP1 || self.magic == MAGIC_CODE_NI1
    }
}

impl NiftiHeader {
    /// Decode a full 348-byte NIfTI-1 header from the start of the
    /// given buffer, with the given byte order. Trailing bytes beyond
    /// offset 348 are ignored.
    ///
    /// The three blocks are decoded in file order over one cursor.
    /// When the magic code is unrecognized, `qform_code` and
    /// `sform_code` are forced to 0 in the returned header: a file
    /// that is not known to be NIfTI-1 cannot be trusted to declare a
    /// spatial transform.
    pub fn decode(src: &[u8], endianness: Endianness) -> Result<NiftiHeader> {
        let mut cursor = ByteCursor::new(src, endianness);
        cursor.rewind();
        let header_key = HeaderKey::decode(&mut cursor)?;
        let image_dimension = ImageDimension::decode(&mut cursor)?;
        let mut data_history = DataHistory::decode(&mut cursor)?;
        if !data_history.is_nifti_magic() {
            data_history.qform_code = 0;
            data_history.sform_code = 0;
        }
        Ok(NiftiHeader {
            header_key,
            image_dimension,
            data_history,
        })
    }

    /// Get the voxel data type as a validated enum.
    pub fn data_type(&self) -> Result<NiftiType> {
        FromPrimitive::from_i16(self.image_dimension.datatype)
            .ok_or_else(|| NiftiError::InvalidCode("datatype", self.image_dimension.datatype))
    }

    /// Get the spatial units type as a validated unit enum.
    pub fn xyzt_to_space(&self) -> Result<Unit> {
        let space_code = self.image_dimension.xyzt_units & 0o0007;
        FromPrimitive::from_u8(space_code)
            .ok_or_else(|| NiftiError::InvalidCode("xyzt units (space)", space_code as i16))
    }

    /// Get the time units type as a validated unit enum.
    pub fn xyzt_to_time(&self) -> Result<Unit> {
        let time_code = self.image_dimension.xyzt_units & 0o0070;
        FromPrimitive::from_u8(time_code)
            .ok_or_else(|| NiftiError::InvalidCode("xyzt units (time)", time_code as i16))
    }

    /// Get the xyzt units type as a validated pair of space and time
    /// unit enums.
    pub fn xyzt_units(&self) -> Result<(Unit, Unit)> {
        Ok((self.xyzt_to_space()?, self.xyzt_to_time()?))
    }

    /// Get the slice order as a validated enum.
    pub fn slice_order(&self) -> Result<SliceOrder> {
        FromPrimitive::from_u8(self.image_dimension.slice_code)
            .ok_or_else(|| {
                NiftiError::InvalidCode("slice order", self.image_dimension.slice_code as i16)
            })
    }

    /// Get the qform coordinate mapping method as a validated enum.
    pub fn qform(&self) -> Result<XForm> {
        FromPrimitive::from_i16(self.data_history.qform_code)
            .ok_or_else(|| NiftiError::InvalidCode("qform", self.data_history.qform_code))
    }

    /// Get the sform coordinate mapping method as a validated enum.
    pub fn sform(&self) -> Result<XForm> {
        FromPrimitive::from_i16(self.data_history.sform_code)
            .ok_or_else(|| NiftiError::InvalidCode("sform", self.data_history.sform_code))
    }
}
