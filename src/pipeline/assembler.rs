//! Record assembly.

use super::classifier::ClassifiedFields;
use crate::models::ContactRecord;

/// Merge canonical name tokens with classified fields into a record,
/// formatting the phone number as `NNN-NNN-NNNN`.
pub fn assemble(first_name: String, last_name: String, fields: ClassifiedFields) -> ContactRecord {
    ContactRecord {
        first_name,
        last_name,
        phone: fields.phone.formatted(),
        zip_code: fields.zip_code.into_inner(),
        color: fields.color.into_inner(),
    }
}
