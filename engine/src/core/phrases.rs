//! Scripted phrasing pools and pacing windows

use shared::{Category, Step};

/// Token replaced with the session's business type label
pub const BUSINESS_TYPE_TOKEN: &str = "{businessType}";

/// Re-prompt shown when no category matched
pub const CLARIFICATION: &str = "أهلاً وسهلاً! أنا مساعدك الذكي لإنشاء المواقع. أخبرني، ما نوع الموقع الذي تريد إنشاءه؟ (مطعم، متجر، عيادة، معرض أعمال، شركة)";

/// Suggested latency window in milliseconds, `[min_ms, max_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    pub fn contains(&self, delay: u64) -> bool {
        if self.min_ms == self.max_ms {
            return delay == self.min_ms;
        }
        (self.min_ms..self.max_ms).contains(&delay)
    }
}

/// Classification hit
pub const CLASSIFIED_DELAY: DelayWindow = DelayWindow::new(1500, 3500);
pub const CLARIFICATION_DELAY: DelayWindow = DelayWindow::fixed(1000);
pub const BUSINESS_NAME_DELAY: DelayWindow = DelayWindow::new(1000, 2500);
pub const DESCRIPTION_DELAY: DelayWindow = DelayWindow::new(2000, 4000);
pub const CUSTOMIZATION_DELAY: DelayWindow = DelayWindow::new(1000, 2500);
pub const FINALIZE_DELAY: DelayWindow = DelayWindow::new(1000, 2500);
pub const QUICK_ACTION_DELAY: DelayWindow = DelayWindow::fixed(1500);

/// Acknowledgements for a freshly classified category
pub fn category_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Restaurant => &[
            "ممتاز! سأبني لك موقع مطعم احترافي مع قائمة طعام تفاعلية ونظام حجز الطاولات.",
            "رائع! المطاعم تحتاج تصميم جذاب لعرض الأطباق اللذيذة.",
            "سأضيف قسم خاص لقائمة الطعام ومعلومات المطعم ونظام الحجز.",
        ],
        Category::Shop => &[
            "عظيم! سأنشئ لك متجر إلكتروني مميز لعرض منتجاتك بشكل احترافي.",
            "ممتاز! المتاجر الإلكترونية تحتاج تصميم جذاب لزيادة المبيعات.",
            "سأضيف سلة تسوق ونظام عرض المنتجات وصفحات الدفع.",
        ],
        Category::Clinic => &[
            "رائع! سأبني لك موقع عيادة طبية احترافي مع نظام حجز المواعيد.",
            "ممتاز! العيادات تحتاج موقع يبعث الثقة والمهنية للمرضى.",
            "سأضيف معلومات الأطباء والخدمات الطبية ونظام حجز المواعيد.",
        ],
        Category::Portfolio => &[
            "عظيم! سأنشئ لك موقع شخصي مميز لعرض أعمالك ومهاراتك.",
            "رائع! معارض الأعمال تحتاج تصميم إبداعي يعكس شخصيتك المهنية.",
            "سأضيف معرض للأعمال وسيرة ذاتية ونموذج للتواصل.",
        ],
        Category::Business => &[
            "ممتاز! سأبني لك موقع شركة احترافي يعكس قوة علامتك التجارية.",
            "رائع! مواقع الشركات تحتاج تصميم مهني يبني الثقة مع العملاء.",
            "سأضيف معلومات الشركة والخدمات وفريق العمل ونموذج التواصل.",
        ],
    }
}

/// Follow-up question appended after a classification hit
pub fn name_question(category: Category) -> String {
    format!("\n\nالآن، ما اسم {} الخاص بك؟", category.label())
}

/// Phrasing pool emitted while leaving `step`
///
/// Classification steps have per-category pools instead, see [`category_pool`].
pub fn step_pool(step: Step) -> &'static [&'static str] {
    match step {
        Step::Welcome | Step::BusinessType => &[CLARIFICATION],
        Step::BusinessName => &[
            "اسم رائع! الآن أخبرني وصف مختصر عن {businessType} أو الخدمات التي تقدمها؟",
            "اسم مميز! ما هو وصف مختصر لـ {businessType} الخاص بك؟",
            "اسم جميل! أريد أن أعرف المزيد عن {businessType} - ما الخدمات التي تقدمها؟",
        ],
        Step::Description => &[
            "ممتاز! الآن سأبدأ في إنشاء موقعك. ستظهر المعاينة على اليمين.",
            "رائع! دعني أبني لك موقع احترافي. شاهد النتيجة على اليمين.",
            "عظيم! سأنشئ موقعك الآن. يمكنك مشاهدة التقدم في المعاينة.",
        ],
        Step::Customization => &[
            "يمكنني تخصيص موقعك أكثر. ما رأيك في تغيير الألوان أو إضافة أقسام جديدة؟",
            "هل تريد تعديل شيء في التصميم؟ يمكنني تغيير الألوان أو ترتيب الأقسام.",
            "موقعك جاهز! هل تحتاج أي تعديلات على الألوان أو المحتوى؟",
        ],
        Step::Finalize => &[
            "موقعك جاهز بنسبة 100%! يمكنك الآن المتابعة للدفع والحصول على الموقع كاملاً.",
            "تم الانتهاء من إنشاء موقعك الاحترافي! المرحلة التالية هي اختيار الخطة المناسبة.",
            "موقعك الرائع جاهز للنشر! اختر خطة الاشتراك للحصول على موقعك.",
        ],
    }
}
