// Theme-aware classes. Colors come from the --tg-theme-* variables published by SettingsProvider.
pub const APP_SHELL: &str = "min-h-screen w-full bg-[var(--tg-theme-bg-color)] text-[var(--tg-theme-text-color)] transition-colors duration-300";
pub const PAGE: &str = "max-w-md mx-auto px-4 pt-4 pb-[calc(88px+var(--safe-area-bottom))]";
pub const PAGE_HEADER: &str = "flex items-center justify-between mb-6";
pub const TEXT_H1: &str = "text-2xl font-bold text-[var(--tg-theme-text-color)]";
pub const TEXT_H2: &str = "text-lg font-semibold text-[var(--tg-theme-text-color)]";
pub const TEXT_HINT: &str = "text-sm text-[var(--tg-theme-hint-color)]";
pub const TEXT_SUBTITLE: &str = "text-xs text-[var(--tg-theme-subtitle-text-color)]";
pub const TEXT_SECTION_HEADER: &str = "text-xs font-semibold uppercase tracking-wider text-[var(--tg-theme-section-header-text-color)] mb-3";
pub const TEXT_ERROR: &str = "text-sm text-[var(--tg-theme-destructive-text-color)]";
pub const CARD: &str = "bg-[var(--tg-theme-section-bg-color)] rounded-2xl p-4 shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)]";
pub const CARD_ERROR: &str = "bg-[var(--tg-theme-secondary-bg-color)] rounded-2xl p-6 text-center text-[var(--tg-theme-destructive-text-color)]";
pub const BUTTON_PRIMARY: &str = "w-full inline-flex items-center justify-center gap-2 py-3 px-4 rounded-xl font-semibold text-[var(--tg-theme-button-text-color)] bg-[var(--tg-theme-button-color)] hover:opacity-90 active:scale-[0.98] disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-200";
pub const INPUT: &str = "block w-full rounded-xl border-0 bg-[var(--tg-theme-secondary-bg-color)] py-2 px-3 text-[var(--tg-theme-text-color)] placeholder:text-[var(--tg-theme-hint-color)] focus:ring-2 focus:ring-[var(--tg-theme-button-color)]";
pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-10 w-10 border-t-4 border-b-4 border-[var(--tg-theme-button-color)]";

// Price tabs
pub const TABS: &str = "flex gap-2 p-1 rounded-xl bg-[var(--tg-theme-secondary-bg-color)]";
pub const TAB: &str = "flex-1 inline-flex items-center justify-center gap-1 py-2 rounded-lg text-sm font-semibold text-[var(--tg-theme-hint-color)] transition-colors duration-200";
pub const TAB_ACTIVE: &str = "flex-1 inline-flex items-center justify-center gap-1 py-2 rounded-lg text-sm font-semibold bg-[var(--tg-theme-section-bg-color)] text-[var(--tg-theme-text-color)] shadow";
pub const STAR_ICON: &str = "h-4 w-4";

// Roulette
pub const ROULETTE_VIEWPORT: &str = "relative w-full overflow-hidden rounded-2xl py-3 bg-[var(--tg-theme-secondary-bg-color)]";
pub const ROULETTE_STRIP: &str = "flex will-change-transform";
pub const ROULETTE_POINTER: &str = "absolute top-0 bottom-0 left-1/2 w-0.5 -translate-x-1/2 bg-[var(--tg-theme-accent-text-color)] z-10";
pub const GIFT_CARD: &str = "relative flex-shrink-0 flex flex-col items-center justify-center rounded-2xl bg-[var(--tg-theme-section-bg-color)]";
pub const GIFT_CARD_SELECTED: &str = "ring-2 ring-[var(--tg-theme-accent-text-color)]";
pub const GIFT_ICON: &str = "h-[78px] w-[78px] drop-shadow-lg mb-3";
pub const STAR_BADGE: &str = "inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-sm font-semibold bg-[var(--tg-theme-secondary-bg-color)]";

// Demo switch
pub const SWITCH_ROW: &str = "flex items-center justify-between py-3";
pub const SWITCH_TRACK: &str = "relative inline-flex h-6 w-11 rounded-full transition-colors duration-200";
pub const SWITCH_THUMB: &str = "absolute top-0.5 h-5 w-5 rounded-full bg-white shadow transition-transform duration-200";

// Win overlay
pub const OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const OVERLAY_CARD: &str = "flex flex-col items-center gap-3 rounded-3xl px-10 py-8 bg-[var(--tg-theme-section-bg-color)] shadow-xl animate-[pulse_1s_ease-in-out_1]";

// Leaderboard
pub const ROW: &str = "flex items-center gap-3 py-3 border-b border-[var(--tg-theme-secondary-bg-color)] last:border-b-0";
pub const RANK: &str = "w-8 text-center font-semibold text-[var(--tg-theme-hint-color)]";
pub const AVATAR: &str = "h-10 w-10 flex-shrink-0 rounded-full flex items-center justify-center font-semibold text-white overflow-hidden";

// Theme toggle
pub const TOGGLE_GROUP: &str = "inline-flex gap-1 p-1 rounded-xl bg-[var(--tg-theme-secondary-bg-color)]";
pub const TOGGLE: &str = "px-3 py-1.5 rounded-lg text-sm text-[var(--tg-theme-hint-color)] transition-colors duration-200";
pub const TOGGLE_ACTIVE: &str = "px-3 py-1.5 rounded-lg text-sm bg-[var(--tg-theme-button-color)] text-[var(--tg-theme-button-text-color)]";

// Tab bar
pub const TAB_BAR: &str = "fixed bottom-0 inset-x-0 z-40 flex justify-around pt-2 pb-[calc(8px+var(--safe-area-bottom))] bg-[var(--tg-theme-bottom-bar-bg-color)] backdrop-blur-md border-t border-[var(--tg-theme-secondary-bg-color)]";
pub const TAB_BAR_ITEM: &str = "flex flex-col items-center gap-0.5 px-4 text-xs text-[var(--tg-theme-hint-color)] transition-colors duration-200";
pub const TAB_BAR_ITEM_ACTIVE: &str = "flex flex-col items-center gap-0.5 px-4 text-xs text-[var(--tg-theme-link-color)]";
