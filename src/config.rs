/// How long the "please fill in every field" banner stays up after a rejected submit.
pub const BANNER_HIDE_MS: u32 = 5_000;

/// Length of the cross-fade between two views.
pub const VIEW_TRANSITION_MS: u32 = 300;

/// Table the booking form writes to.
pub const BOOKINGS_TABLE: &str = "prenotazioni";

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    match option_env!("MATCHME_SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321",  // supabase start
    }
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("MATCHME_SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("MATCHME_SUPABASE_ANON_KEY").unwrap_or("")
}
