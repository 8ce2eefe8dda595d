//! The Khuta ADHD assessment app deck (Arabic/English)

use crate::deck::Presentation;
use crate::errors::DeckError;
use crate::layout::{
    ArchitectureSlide, BulletSlide, Column, FlowSlide, FlowStep, Layer, ScoreBand, ScoreSlide,
    SectionSlide, TableSlide, TitleSlide, TwoColumnSlide,
};
use crate::log::info;
use crate::theme::Swatch;

/// Default output file name
pub const OUTPUT_FILE: &str = "Khuta_Presentation.pptx";

fn architecture() -> ArchitectureSlide {
    ArchitectureSlide::new(
        "System Architecture - هيكل النظام",
        [
            Layer::new("Presentation Layer\nواجهة المستخدم", "Screens & Widgets", Swatch::Primary),
            Layer::new(
                "State Management\nإدارة الحالة (BLoC)",
                "AuthCubit | ChildCubit | AssessmentCubit",
                Swatch::Indigo,
            ),
            Layer::new(
                "Service Layer\nطبقة الخدمات",
                "ScoringService | AIService | ErrorHandler",
                Swatch::Emerald,
            ),
            Layer::new("Data Layer\nطبقة البيانات", "Firebase | Firestore | Gemini AI", Swatch::Amber),
        ],
    )
}

fn user_flow() -> FlowSlide {
    FlowSlide::new(
        "User Flow - مسار المستخدم",
        [
            FlowStep::new("1. فتح التطبيق", "Splash Screen"),
            FlowStep::new("2. التعريف", "Onboarding"),
            FlowStep::new("3. تسجيل الدخول", "Login/Register"),
            FlowStep::new("4. الشاشة الرئيسية", "Home Screen"),
            FlowStep::new("5. إضافة طفل", "Add Child"),
            FlowStep::new("6. بدء التقييم", "Start Assessment"),
            FlowStep::new("7. الإجابة", "27 Questions"),
            FlowStep::new("8. النتائج", "Results + AI"),
        ],
    )
}

fn score_interpretation() -> ScoreSlide {
    ScoreSlide::new(
        "Score Interpretation - تفسير الدرجات",
        [
            ScoreBand::new("< 45", "Average\nمتوسط", Swatch::Green, "Low Concern\nقلق منخفض"),
            ScoreBand::new(
                "45 - 55",
                "Slightly Elevated\nمرتفع قليلاً",
                Swatch::Yellow,
                "Monitor\nيحتاج متابعة",
            ),
            ScoreBand::new("55 - 65", "Elevated\nمرتفع", Swatch::Orange, "Concern\nيحتاج اهتمام"),
            ScoreBand::new("> 65", "Very Elevated\nمرتفع جداً", Swatch::Red, "High Concern\nيحتاج تدخل"),
        ],
    )
}

/// Assemble all 28 slides in presentation order.
pub fn build() -> Result<Presentation, DeckError> {
    let mut deck = Presentation::default();

    deck.add(
        TitleSlide::new("تطبيق خطى")
            .subtitle("Khuta - ADHD Assessment App\nتقييم اضطراب فرط الحركة وتشتت الانتباه"),
    )?
    .add(SectionSlide::new("نظرة عامة - Overview"))?
    .add(BulletSlide::new(
        "About Khuta - عن تطبيق خطى",
        [
            "تطبيق موبايل لتقييم اضطراب ADHD باستخدام مقياس كونرز",
            "Mobile app for ADHD assessment using Conners' Rating Scale",
            "يدعم اللغتين العربية والإنجليزية",
            "توصيات ذكية باستخدام الذكاء الاصطناعي (Gemini AI)",
            "تقارير PDF قابلة للمشاركة",
            "يعمل بدون إنترنت مع مزامنة تلقائية",
        ],
    ))?
    .add(TwoColumnSlide::new(
        "Key Features - الميزات الرئيسية",
        Column::new([
            "تسجيل حساب آمن",
            "إضافة ملفات الأطفال",
            "تقييم الوالدين (27 سؤال)",
            "تقييم المعلم (27 سؤال)",
            "حساب T-Score",
        ])
        .heading("Authentication & Assessment"),
        Column::new([
            "توصيات AI مخصصة",
            "سجل التقييمات السابقة",
            "تقارير PDF",
            "الوضع الليلي",
            "دعم وضع عدم الاتصال",
        ])
        .heading("Reports & Settings"),
    ))?;

    deck.add(SectionSlide::new("التقنيات المستخدمة - Technology Stack"))?
        .add(TableSlide::new(
            "Technology Stack - التقنيات",
            ["Component", "Technology", "المكون"],
            [
                ["Frontend", "Flutter (Dart)", "الواجهة الأمامية"],
                ["State Management", "BLoC / Cubit", "إدارة الحالة"],
                ["Backend", "Firebase", "الخدمات الخلفية"],
                ["Database", "Cloud Firestore", "قاعدة البيانات"],
                ["Authentication", "Firebase Auth", "المصادقة"],
                ["AI", "Google Gemini 2.0", "الذكاء الاصطناعي"],
                ["Reports", "PDF Generation", "التقارير"],
            ],
        ))?
        .add(SectionSlide::new("هيكل النظام - System Architecture"))?
        .add(architecture())?
        .add(SectionSlide::new("مسار المستخدم - User Flow"))?
        .add(user_flow())?;

    deck.add(SectionSlide::new("عملية التقييم - Assessment Process"))?
        .add(BulletSlide::new(
            "Assessment Process - عملية التقييم",
            [
                "اختيار نوع التقييم (والدين / معلم)",
                "الإجابة على 27 سؤال من مقياس كونرز",
                "خيارات الإجابة: (0) أبداً - (1) قليلاً - (2) كثيراً - (3) كثيراً جداً",
                "حساب الدرجة الخام من مجموع الإجابات",
                "تحويل الدرجة إلى T-Score حسب العمر والجنس",
                "الحصول على توصيات مخصصة من الذكاء الاصطناعي",
                "حفظ النتائج وإمكانية تصدير تقرير PDF",
            ],
        ))?
        .add(score_interpretation())?;

    deck.add(SectionSlide::new("قاعدة البيانات - Database Schema"))?
        .add(BulletSlide::new(
            "Database Structure - هيكل البيانات",
            [
                "Users Collection: بيانات المستخدمين (البريد الإلكتروني، الاسم)",
                "Children Collection: بيانات الأطفال (الاسم، العمر، الجنس)",
                "TestResults Collection: نتائج التقييمات (الدرجة، التوصيات)",
                "Cloud Firestore مع دعم وضع عدم الاتصال",
                "قواعد أمان Firestore لحماية البيانات",
                "المستخدم يمكنه الوصول فقط لبياناته الخاصة",
            ],
        ))?
        .add(SectionSlide::new("الأمان - Security"))?
        .add(TwoColumnSlide::new(
            "Security Features - ميزات الأمان",
            Column::new([
                "Firebase Authentication",
                "Email Verification",
                "Password Reset",
                "Secure Session Management",
            ])
            .heading("Authentication"),
            Column::new([
                "Firebase App Check",
                "Firestore Security Rules",
                "Data Encryption",
                "Offline Data Protection",
            ])
            .heading("Data Protection"),
        ))?;

    deck.add(SectionSlide::new("الذكاء الاصطناعي - AI Recommendations"))?
        .add(BulletSlide::new(
            "AI-Powered Recommendations - التوصيات الذكية",
            [
                "استخدام Google Gemini 2.0 Flash للتوصيات",
                "تحليل إجابات التقييم لفهم نمط السلوك",
                "توصيات مخصصة حسب درجة التقييم",
                "دعم اللغتين العربية والإنجليزية",
                "توصيات احتياطية في حالة فشل الاتصال",
                "إعادة المحاولة تلقائياً (Retry Logic)",
            ],
        ))?
        .add(SectionSlide::new("شاشات التطبيق - App Screens"))?
        .add(TwoColumnSlide::new(
            "App Screens - شاشات التطبيق",
            Column::new([
                "Splash Screen - شاشة البداية",
                "Onboarding - شاشات التعريف (3)",
                "Login - تسجيل الدخول",
                "Register - إنشاء حساب",
                "Email Verification - التحقق من البريد",
            ])
            .heading("Authentication Screens"),
            Column::new([
                "Home - الشاشة الرئيسية",
                "Add Child - إضافة طفل",
                "Child Details - تفاصيل الطفل",
                "Assessment - التقييم (27 سؤال)",
                "Results - النتائج والتوصيات",
                "Settings - الإعدادات",
            ])
            .heading("Main Screens"),
        ))?;

    deck.add(SectionSlide::new("دعم وضع عدم الاتصال - Offline Support"))?
        .add(BulletSlide::new(
            "Offline Support - العمل بدون إنترنت",
            [
                "Firestore Persistence مع تخزين محلي غير محدود",
                "عرض البيانات المحفوظة عند انقطاع الاتصال",
                "Offline Queue لحفظ العمليات المعلقة",
                "مزامنة تلقائية عند عودة الاتصال",
                "Offline Banner لإظهار حالة الاتصال",
                "تجربة مستخدم سلسة في جميع الأحوال",
            ],
        ))?
        .add(SectionSlide::new("الاختبارات - Testing"))?
        .add(BulletSlide::new(
            "Testing Strategy - استراتيجية الاختبارات",
            [
                "Unit Tests: اختبار الخدمات والـ Cubits",
                "Widget Tests: اختبار مكونات الواجهة",
                "Integration Tests: اختبار تدفق العمليات الكاملة",
                "Mock Objects: استخدام Mockito للاختبارات المعزولة",
                "Test Coverage: تغطية شاملة للكود الأساسي",
            ],
        ))?;

    deck.add(SectionSlide::new("الملخص - Summary"))?
        .add(BulletSlide::new(
            "Project Summary - ملخص المشروع",
            [
                "تطبيق Flutter متكامل لتقييم ADHD",
                "استخدام BLoC/Cubit لإدارة الحالة",
                "Firebase للمصادقة وتخزين البيانات",
                "Gemini AI للتوصيات الذكية",
                "دعم اللغتين العربية والإنجليزية",
                "تصميم حديث مع Dark/Light Mode",
                "يعمل بدون إنترنت مع مزامنة تلقائية",
            ],
        ))?
        .add(TitleSlide::new("شكراً لكم").subtitle("Thank You\n\nKhuta - ADHD Assessment App"))?;

    info!(slides = deck.len(), "khuta deck assembled");
    Ok(deck)
}
