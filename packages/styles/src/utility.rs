//! Fixed utility-class rule table.
//!
//! Snippets lean on a small subset of Tailwind and Bootstrap class names, and
//! the preview surface ships neither framework. This table covers the classes
//! the stock templates and the component library actually use. It is
//! theme-independent and injected on every apply, between the theme rule and
//! any custom styles.

pub const UTILITY_RULES: &str = r#"/* Tailwind Colors */
.bg-purple-600, .bg-purple-700 { background-color: #7c3aed; }
.bg-purple-800 { background-color: #5b21b6; }
.bg-purple-100 { background-color: #ede9fe; }
.bg-purple-300 { background-color: #c4b5fd; }
.text-purple-600 { color: #7c3aed; }
.text-purple-300 { color: #c4b5fd; }
.text-white { color: #ffffff; }
.border-white { border-color: #ffffff; }

/* Tailwind Spacing */
.p-4 { padding: 1rem; }
.p-1, .p-2, .p-3 { padding: 0.25rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.gap-4, .gap-6 { gap: 1rem; }
.mx-auto { margin-left: auto; margin-right: auto; }
.mb-3, .mb-4 { margin-bottom: 1rem; }
.me-2 { margin-right: 0.5rem; }

/* Tailwind Flexbox */
.flex { display: flex; }
.justify-between { justify-content: space-between; }
.items-center { align-items: center; }

/* Tailwind Typography */
.text-2xl, .text-xl, .text-lg { font-size: 1.5rem; line-height: 2rem; }
.font-semibold, .font-bold { font-weight: 600; }

/* Tailwind Borders */
.rounded { border-radius: 0.25rem; }
.border { border-width: 1px; }
.shadow-md { box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06); }

/* Tailwind Max Width */
.max-w-6xl, .max-w-7xl { max-width: 72rem; }

/* Tailwind Hover/Cursor */
.hover\:bg-purple-100:hover { background-color: #ede9fe; }
.hover\:bg-purple-800:hover { background-color: #5b21b6; }
.hover\:text-purple-300:hover { color: #c4b5fd; }
.cursor-pointer { cursor: pointer; }

/* Bootstrap Colors */
.bg-primary { background-color: #0d6efd; }
.bg-secondary { background-color: #6c757d; }
.bg-success { background-color: #198754; }
.bg-danger { background-color: #dc3545; }
.bg-warning { background-color: #ffc107; }
.bg-info { background-color: #0dcaf0; }
.bg-light { background-color: #f8f9fa; }
.bg-dark { background-color: #212529; }

.text-primary { color: #0d6efd; }
.text-secondary { color: #6c757d; }
.text-success { color: #198754; }
.text-danger { color: #dc3545; }
.text-warning { color: #ffc107; }
.text-info { color: #0dcaf0; }
.text-light { color: #f8f9fa; }
.text-dark { color: #212529; }

/* Bootstrap Spacing */
.m-1, .m-2, .m-3, .m-4, .m-5 { margin: 0.25rem; }
.mt-1, .mt-2, .mt-3, .mt-4, .mt-5 { margin-top: 0.25rem; }
.mb-1, .mb-2 { margin-bottom: 0.25rem; }
.ms-1, .ms-2, .ms-3 { margin-left: 0.25rem; }
.me-1, .me-3, .me-4 { margin-right: 0.25rem; }

/* Bootstrap Display/Flex */
.d-flex { display: flex; }
.justify-content-center { justify-content: center; }
.justify-content-between { justify-content: space-between; }
.align-items-center { align-items: center; }
.gap-2, .gap-3 { gap: 0.5rem; }

/* Bootstrap Text */
.text-center { text-align: center; }
.fw-bold { font-weight: bold; }

/* Bootstrap Borders */
.rounded-circle { border-radius: 50%; }
.shadow-sm { box-shadow: 0 0.125rem 0.25rem rgba(0, 0, 0, 0.075); }

/* Bootstrap Buttons */
.btn { display: inline-block; font-weight: 400; text-align: center; vertical-align: middle; user-select: none; border: 1px solid transparent; padding: 0.375rem 0.75rem; font-size: 1rem; line-height: 1.5; border-radius: 0.25rem; }
.btn-primary { color: #fff; background-color: #0d6efd; border-color: #0d6efd; }
.btn-secondary { color: #fff; background-color: #6c757d; border-color: #6c757d; }
.btn-success { color: #fff; background-color: #198754; border-color: #198754; }
.btn-outline-primary { color: #0d6efd; border-color: #0d6efd; }
"#;
