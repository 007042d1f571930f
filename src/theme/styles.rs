//! Global CSS styles for Card Hub.
//!
//! Dark surface, glass cards, one accent colour per state.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --surface: #0d0f17;
  --surface-raised: rgba(255, 255, 255, 0.04);
  --surface-border: rgba(255, 255, 255, 0.08);

  /* Accents */
  --accent: #7c5cff;
  --accent-glow: rgba(124, 92, 255, 0.35);
  --accent-soft: rgba(124, 92, 255, 0.12);
  --muted-accent: #4b5066;

  /* Text */
  --text-primary: #f4f5fa;
  --text-secondary: rgba(244, 245, 250, 0.7);
  --text-muted: rgba(244, 245, 250, 0.45);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-3xl: 2.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  -webkit-font-smoothing: antialiased;
}

/* === Surface === */
/* No filter or transform here: fixed descendants must stay viewport-pinned. */
.hub-surface {
  position: relative;
  isolation: isolate;
  min-height: 100vh;
  padding: 0 2rem 4rem;
}

.hub-surface::before {
  content: '';
  position: fixed;
  inset: 0;
  z-index: -1;
  pointer-events: none;
  background-image:
    radial-gradient(circle at 20% 20%, var(--accent-soft) 0, transparent 40%),
    radial-gradient(circle at 80% 60%, rgba(0, 200, 255, 0.08) 0, transparent 45%);
  background-repeat: no-repeat;
  background-position: var(--parallax-x, 0px) var(--parallax-y, 0px);
  animation: hue-drift 24s linear infinite;
  animation-play-state: var(--ambient-play, running);
}

@keyframes hue-drift {
  from { filter: hue-rotate(0deg); }
  to { filter: hue-rotate(360deg); }
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 10;
  padding: 3rem 0 1.5rem;
  text-align: center;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.header-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
}

.header-subtitle {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

/* === Category Tabs === */
.category-tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin: 1.5rem 0 2rem;
}

.category-tab {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--surface-border);
  border-radius: 999px;
  background: var(--surface-raised);
  color: var(--text-secondary);
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.category-tab:hover {
  color: var(--text-primary);
  border-color: var(--accent);
}

.category-tab.active {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--text-primary);
  box-shadow: 0 0 18px var(--accent-glow);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

.card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
  border: 1px solid var(--surface-border);
  border-radius: 16px;
  background: var(--surface-raised);
  cursor: pointer;
  outline: none;
  transition: transform var(--transition-normal), opacity var(--transition-slow),
    border-color var(--transition-fast), box-shadow var(--transition-fast);
}

/* Entrance offset, only once the host can report intersections. */
.reveal-ready .card:not(.revealed) {
  opacity: 0;
  transform: translateY(20px);
}

.card:hover,
.card:focus-visible {
  border-color: var(--accent);
  box-shadow: 0 8px 32px var(--accent-glow);
}

.card-icon {
  font-size: 2rem;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.card-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  line-height: 1.5;
}

.card-disabled {
  cursor: not-allowed;
  filter: grayscale(0.6);
}

.card-disabled:hover,
.card-disabled:focus-visible {
  border-color: var(--muted-accent);
  box-shadow: none;
}

.card-badge {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--muted-accent);
  color: var(--text-primary);
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
  20%, 40%, 60%, 80% { transform: translateX(5px); }
}

/* Same frames under a second name, so a restarted shake replays. */
@keyframes shake-replay {
  0%, 100% { transform: translateX(0); }
  10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
  20%, 40%, 60%, 80% { transform: translateX(5px); }
}

/* === Notification === */
.notification {
  position: fixed;
  top: 20px;
  left: 50%;
  z-index: 1000;
  padding: 0.9rem 1.75rem;
  border-radius: 12px;
  background: var(--accent);
  color: var(--text-primary);
  font-weight: 500;
  box-shadow: 0 10px 30px var(--accent-glow);
  pointer-events: none;
  transition: transform var(--transition-slow);
}
"#;
