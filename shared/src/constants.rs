// Spin timing
pub const SPIN_ANIMATION_MS: u32 = 4000;
pub const REVEAL_DISPLAY_MS: u32 = 3000;
pub const HAPTIC_PATTERN_MS: [u32; 3] = [50, 30, 100];

// Roulette strip geometry
pub const STRIP_REPETITIONS: usize = 10;
pub const POINTER_BIAS_PX: f64 = 6.0; // pointer sits slightly right of true center
pub const CARD_GAP_PX: f64 = 12.0;
pub const CARD_WIDTH_COMPACT_PX: f64 = 135.0;
pub const CARD_WIDTH_REGULAR_PX: f64 = 155.0;
pub const CARD_HEIGHT_COMPACT_PX: f64 = 156.0;
pub const CARD_HEIGHT_REGULAR_PX: f64 = 176.0;
pub const FALLBACK_CONTAINER_WIDTH_PX: f64 = 360.0;

pub const EASING_IOS: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
pub const EASING_DEFAULT: &str = "cubic-bezier(0.15, 0.7, 0.4, 1)";

// Adaptivity breakpoints
pub const COMPACT_BREAKPOINT_PX: f64 = 600.0;

// Purchases
pub const SPIN_PRICES: [u32; 3] = [25, 50, 100];
pub const DEFAULT_SPIN_PRICE: u32 = 25;
pub const INVOICE_CURRENCY: &str = "XTR";
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

// Endpoints
pub const LEADERBOARD_ENDPOINT: &str = "/api/leaderboard";
pub const INVOICE_ENDPOINT: &str = "/api/invoice";

// Local storage
pub const THEME_STORAGE_KEY: &str = "theme_mode";

pub const MIN_SEARCH_QUERY_LEN: usize = 3;

pub const INVOICE_UNAVAILABLE_ERROR: &str = "Payments are only available inside Telegram";
pub const INVOICE_FAILED_ERROR: &str = "Could not create the invoice. Please try again";
pub const LEADERBOARD_ERROR: &str = "Could not load the leaderboard";
