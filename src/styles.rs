pub const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #fff;
    background: #1e0b3a;
}
a { color: #f9a8d4; text-decoration: none; }
a:hover { color: #f472b6; }

.abstract-background {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: none;
    overflow: hidden;
}
.bg-base { position: absolute; inset: 0; background: linear-gradient(180deg, #1e0b3a, #1e0b3a 50%, #1e1b4b); }
.bg-glow { position: absolute; width: 100%; height: 100%; }
.bg-glow-top { opacity: 0.2; background: radial-gradient(circle at 30% 20%, rgba(120, 50, 200, 0.3), transparent 60%); }
.bg-glow-right { top: 50%; opacity: 0.15; background: radial-gradient(circle at 70% 60%, rgba(160, 50, 180, 0.2), transparent 50%); }
.bg-shimmer {
    position: absolute;
    inset: 0;
    opacity: 0.1;
    background: linear-gradient(45deg, #4a1d96, #2e1065, #4a1d96);
    background-size: 400% 400%;
    animation: gradientSlow 15s ease infinite;
}
.bg-divider {
    position: absolute;
    left: 0;
    width: 100%;
    height: 1px;
    background: linear-gradient(90deg, transparent, rgba(168, 85, 247, 0.2), transparent);
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(46, 16, 101, 0.85);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid rgba(168, 85, 247, 0.2);
}
.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-size: 1.5rem; font-weight: bold; color: #fff; }
.nav-right { display: flex; gap: 1.5rem; }
.nav-link { color: #e9d5ff; }
.nav-link.active { color: #fff; border-bottom: 2px solid #ec4899; }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }

.app-main {
    position: relative;
    z-index: 10;
    min-height: 100vh;
    transition: opacity 0.3s ease, transform 0.3s ease;
}
.app-main.transitioning { opacity: 0; transform: translateY(8px); }

.page { padding: 6rem 0 4rem; }
.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 640px; }
.page-title, .section-title { text-align: center; font-size: 2.25rem; margin-bottom: 3rem; }
.section { padding: 5rem 0; border-top: 1px solid rgba(168, 85, 247, 0.2); }

.card {
    background: linear-gradient(135deg, rgba(88, 28, 135, 0.6), rgba(107, 33, 168, 0.5));
    border: 1px solid rgba(168, 85, 247, 0.3);
    border-radius: 1.5rem;
    padding: 2rem;
    backdrop-filter: blur(4px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
}

.hero { min-height: 90vh; display: flex; align-items: center; justify-content: center; padding: 0 1.5rem; }
.hero-card { max-width: 760px; text-align: center; padding: 2.5rem; }
.hero-heart { font-size: 3.5rem; color: #ec4899; }
.hero-title { font-size: 4rem; margin: 0.5rem 0 1.5rem; }
.hero-subtitle { font-size: 1.25rem; color: #e9d5ff; margin-bottom: 2rem; }

.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 2.5rem; }
.feature { text-align: center; }
.feature p { color: #e9d5ff; }
.feature-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    background: linear-gradient(135deg, #7e22ce, #a855f7);
}
.cta { text-align: center; padding: 3rem; }
.cta p { color: #e9d5ff; font-size: 1.25rem; margin-bottom: 2.5rem; }

.button {
    border: none;
    border-radius: 9999px;
    padding: 0.75rem 2rem;
    font-weight: bold;
    font-size: 1rem;
    color: #fff;
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.button:hover:not(:disabled) { transform: translateY(-2px) scale(1.03); }
.button:disabled { opacity: 0.75; cursor: not-allowed; }
.button.primary { background: linear-gradient(90deg, #9333ea, #ec4899); }
.button.outline { background: transparent; border: 2px solid rgba(168, 85, 247, 0.5); }
.button.wide { width: 100%; margin-top: 1rem; }
.button-row { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

.field { margin-bottom: 1.5rem; }
.field-row { display: grid; grid-template-columns: 1fr 2fr; gap: 1.5rem; }
.field-label { display: block; color: #e9d5ff; margin-bottom: 0.5rem; }
.required-mark { color: #f472b6; }
.field-input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(147, 51, 234, 0.4);
    background: rgba(88, 28, 135, 0.4);
    color: #fff;
    font: inherit;
}
.field-input:focus { outline: none; box-shadow: 0 0 0 2px #a855f7; }
.field-input.invalid, .choice-group.invalid { border: 1px solid #ec4899; }
.field-error { margin: 0.25rem 0 0; color: #f472b6; font-size: 0.875rem; }
.choice-group { display: flex; flex-wrap: wrap; gap: 0.5rem; border-radius: 0.75rem; padding: 0.25rem; }
.choice {
    flex: 1;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(147, 51, 234, 0.4);
    background: rgba(88, 28, 135, 0.4);
    color: #e9d5ff;
    cursor: pointer;
}
.choice.active { background: linear-gradient(90deg, #9333ea, #ec4899); color: #fff; font-weight: bold; }
.stepper { display: flex; }
.stepper-input { text-align: center; border-radius: 0.75rem 0 0 0.75rem; }
.stepper-buttons { display: flex; flex-direction: column; }
.stepper-button {
    flex: 1;
    padding: 0 0.75rem;
    border: none;
    color: #e9d5ff;
    background: rgba(147, 51, 234, 0.4);
    cursor: pointer;
}

.validation-banner {
    display: flex;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
    padding: 1rem;
    border-radius: 0.75rem;
    background: linear-gradient(90deg, rgba(219, 39, 119, 0.7), rgba(220, 38, 38, 0.7));
    animation: shake 0.5s ease-in-out;
}
.banner-icon { font-weight: bold; }
.banner-title { margin: 0; font-weight: 500; }
.banner-detail { margin: 0; color: #fbcfe8; font-size: 0.875rem; }
.submit-error { color: #ef4444; font-size: 0.875rem; }

.success { text-align: center; }
.success-icon { font-size: 3.5rem; color: #22c55e; animation: float 3s ease-in-out infinite; }
.success-copy { color: #e9d5ff; margin-bottom: 2rem; }

.contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2rem; }
.contact-list { list-style: none; padding: 0; }
.contact-list li { margin-bottom: 1.25rem; display: flex; flex-direction: column; }
.contact-label { color: #e9d5ff; font-size: 0.875rem; }

.site-footer { position: relative; z-index: 10; padding: 3rem 0 1.5rem; border-top: 1px solid rgba(168, 85, 247, 0.2); }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.footer-grid a { display: block; margin-bottom: 0.5rem; }
.footer-logo { font-size: 1.5rem; font-weight: bold; color: #fff; }
.footer-tagline { color: #e9d5ff; }
.footer-social { display: flex; gap: 1rem; }
.footer-copy { text-align: center; color: #c4b5fd; font-size: 0.875rem; margin-top: 2rem; }

.fade-in { animation: fadeIn 0.6s ease-out; }
.slide-up { animation: slideUp 0.6s ease-out both; }
.scale-in { animation: scaleIn 0.4s ease-out; }
.pulse-slow { animation: pulse 3s ease-in-out infinite; }

@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes slideUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes scaleIn { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.6; } }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-8px); } }
@keyframes shake { 0%, 100% { transform: translateX(0); } 25% { transform: translateX(-5px); } 75% { transform: translateX(5px); } }
@keyframes gradientSlow { 0% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } 100% { background-position: 0% 50%; } }

@media (max-width: 768px) {
    .burger-menu { display: block; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1.5rem;
        background: rgba(46, 16, 101, 0.95);
    }
    .hero-title { font-size: 3rem; }
    .field-row { grid-template-columns: 1fr; }
}
"#;
