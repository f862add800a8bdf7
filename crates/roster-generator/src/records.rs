//! Record generation.

use rayon::prelude::*;
use roster_core::generate_password;
use roster_models::{RosterRequest, UserRecord, Vano};

use crate::GenerationSettings;

/// Builds one record per VANO in `[vano_start, vano_end]`, ascending.
///
/// Callers validate the range first; an inverted range yields no records.
pub fn generate_records(request: &RosterRequest, settings: &GenerationSettings) -> Vec<UserRecord> {
    let count = request.user_count() as usize;
    let start = request.vano_start;

    (0..count)
        .into_par_iter()
        .map(|offset| {
            let vano = Vano::new(start + offset as u64);
            UserRecord {
                vano,
                email: vano.email(&settings.email_domain),
                password: generate_password(settings.password_length),
                role: request.role,
                department: request.department.clone(),
            }
        })
        .collect()
}
