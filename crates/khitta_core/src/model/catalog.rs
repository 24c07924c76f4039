//! Fixed label catalogs for enumerated form fields.
//!
//! # Responsibility
//! - Own the closed label sets offered by the form: teaching methods,
//!   teaching aids, and per-domain objective taxonomy levels.
//!
//! # Invariants
//! - Catalog contents are stable within one schema version; persisted
//!   records reference labels by value, not by index.

/// Teaching methods selectable on a lesson plan.
pub const TEACHING_METHODS: &[&str] = &[
    "الحوار والمناقشة",
    "العصف الذهني",
    "التعلم التعاوني",
    "حل المشكلات",
    "الاستقصاء",
    "التعلم باللعب",
    "الإلقاء",
    "لعب الأدوار",
];

/// Teaching aids selectable on a lesson plan.
pub const TEACHING_AIDS: &[&str] = &[
    "السبورة",
    "الكتاب المدرسي",
    "جهاز العرض",
    "البطاقات",
    "الصور والملصقات",
    "المجسمات",
    "أوراق العمل",
    "الفيديو التعليمي",
];

/// Taxonomy levels for cognitive-domain objectives.
pub const COGNITIVE_LEVELS: &[&str] = &[
    "التذكر",
    "الفهم",
    "التطبيق",
    "التحليل",
    "التقويم",
    "الإبداع",
];

/// Taxonomy levels for psychomotor-domain objectives.
pub const PSYCHOMOTOR_LEVELS: &[&str] = &[
    "الملاحظة",
    "التهيئة",
    "الاستجابة الموجهة",
    "الآلية",
    "الاستجابة المعقدة",
    "التكيف",
    "الإبداع الحركي",
];

/// Taxonomy levels for affective-domain objectives.
pub const AFFECTIVE_LEVELS: &[&str] = &[
    "الاستقبال",
    "الاستجابة",
    "التقييم",
    "التنظيم",
    "التمييز بالقيمة",
];
