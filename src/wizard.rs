//! Survey Wizard
//!
//! Five ordered steps over one in-memory draft. Moving between steps never
//! validates; only submission checks the required answers.

use leptos::prelude::*;
use thiserror::Error;

use crate::error::{ApiError, ValidationError};
use crate::models::{ListField, ScalarField, SurveyDraft};
use crate::store::SurveyStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurveyStep {
    #[default]
    BasicInfo,
    HealthInfo,
    MealPlanning,
    FoodPreferences,
    CookingExperience,
}

impl SurveyStep {
    pub const ALL: [SurveyStep; 5] = [
        SurveyStep::BasicInfo,
        SurveyStep::HealthInfo,
        SurveyStep::MealPlanning,
        SurveyStep::FoodPreferences,
        SurveyStep::CookingExperience,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }

    pub fn title(self) -> &'static str {
        match self {
            SurveyStep::BasicInfo => "기본 정보",
            SurveyStep::HealthInfo => "건강 정보",
            SurveyStep::MealPlanning => "식사 계획",
            SurveyStep::FoodPreferences => "음식 선호도",
            SurveyStep::CookingExperience => "요리 경험",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SurveyStep::BasicInfo => "나이, 성별 등 기본 정보를 입력해주세요",
            SurveyStep::HealthInfo => "건강 상태와 관심사를 알려주세요",
            SurveyStep::MealPlanning => "식사 목표와 예산을 설정해주세요",
            SurveyStep::FoodPreferences => "좋아하는 음식과 제한사항을 선택해주세요",
            SurveyStep::CookingExperience => "요리 경험과 주방 환경을 알려주세요",
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            SurveyStep::BasicInfo => BASIC_INFO,
            SurveyStep::HealthInfo => HEALTH_INFO,
            SurveyStep::MealPlanning => MEAL_PLANNING,
            SurveyStep::FoodPreferences => FOOD_PREFERENCES,
            SurveyStep::CookingExperience => COOKING_EXPERIENCE,
        }
    }
}

// ========================
// Step Questions
// ========================

/// One input on a wizard step. Option pairs are `(value, label)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Question {
    Select {
        field: ScalarField,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    Radio {
        field: ScalarField,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    Number {
        field: ScalarField,
        label: &'static str,
        placeholder: &'static str,
    },
    Text {
        field: ScalarField,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
    },
    Checklist {
        field: ListField,
        label: &'static str,
        options: &'static [&'static str],
    },
}

impl Question {
    /// Label with the required marker appended
    pub fn display_label(&self) -> String {
        let (label, required) = match self {
            Question::Select { field, label, .. }
            | Question::Radio { field, label, .. }
            | Question::Number { field, label, .. }
            | Question::Text { field, label, .. } => (*label, ScalarField::REQUIRED.contains(field)),
            Question::Checklist { label, .. } => (*label, false),
        };
        if required {
            format!("{} *", label)
        } else {
            label.to_string()
        }
    }
}

const BASIC_INFO: &[Question] = &[
    Question::Select {
        field: ScalarField::Age,
        label: "나이",
        options: &[
            ("10-19", "10-19세"),
            ("20-29", "20-29세"),
            ("30-39", "30-39세"),
            ("40-49", "40-49세"),
            ("50-59", "50-59세"),
            ("60+", "60세 이상"),
        ],
    },
    Question::Radio {
        field: ScalarField::Gender,
        label: "성별",
        options: &[("male", "남성"), ("female", "여성"), ("other", "기타")],
    },
    Question::Number { field: ScalarField::Height, label: "키 (cm)", placeholder: "170" },
    Question::Number { field: ScalarField::Weight, label: "체중 (kg)", placeholder: "65" },
    Question::Text {
        field: ScalarField::Email,
        label: "이메일",
        input_type: "email",
        placeholder: "example@email.com",
    },
    Question::Text { field: ScalarField::Name, label: "이름", input_type: "text", placeholder: "홍길동" },
];

const HEALTH_INFO: &[Question] = &[
    Question::Checklist {
        field: ListField::DiagnosedDiseases,
        label: "진단받은 질병 (해당하는 것 모두 선택)",
        options: &["당뇨병", "고혈압", "고지혈증", "심장질환", "알레르기", "위장질환", "없음"],
    },
    Question::Checklist {
        field: ListField::HealthInterests,
        label: "건강 관심사 (해당하는 것 모두 선택)",
        options: &["체중감량", "근육증가", "면역력강화", "피부개선", "소화개선", "피로회복"],
    },
    Question::Select {
        field: ScalarField::ActivityLevel,
        label: "활동 수준",
        options: &[
            ("sedentary", "좌식 생활"),
            ("light", "가벼운 활동"),
            ("moderate", "보통 활동"),
            ("active", "활발한 활동"),
            ("very_active", "매우 활발한 활동"),
        ],
    },
];

const MEAL_PLANNING: &[Question] = &[
    Question::Select {
        field: ScalarField::MealTarget,
        label: "식사 목표",
        options: &[("self", "혼자 식사"), ("family", "가족 식사"), ("diet", "다이어트 식단"), ("bulk", "벌크업 식단")],
    },
    Question::Select {
        field: ScalarField::DietGoal,
        label: "다이어트 목표",
        options: &[
            ("lose_weight", "체중 감량"),
            ("maintain", "체중 유지"),
            ("gain_weight", "체중 증가"),
            ("health", "건강 개선"),
        ],
    },
    Question::Select {
        field: ScalarField::WeeklyBudget,
        label: "주간 식비 예산",
        options: &[
            ("under_30000", "3만원 미만"),
            ("30000_50000", "3-5만원"),
            ("50000_70000", "5-7만원"),
            ("70000_100000", "7-10만원"),
            ("over_100000", "10만원 이상"),
        ],
    },
    Question::Number { field: ScalarField::HouseholdSize, label: "가구 인원수", placeholder: "1" },
];

const FOOD_PREFERENCES: &[Question] = &[
    Question::Checklist {
        field: ListField::DietaryRestrictions,
        label: "식이 제한사항",
        options: &["채식주의", "비건", "글루텐프리", "유당불내증", "할랄", "코셔", "없음"],
    },
    Question::Checklist {
        field: ListField::CookingStyles,
        label: "선호하는 요리 스타일",
        options: &["한식", "중식", "일식", "양식", "동남아", "인도요리"],
    },
    Question::Checklist {
        field: ListField::Allergens,
        label: "알레르기",
        options: &["땅콩", "견과류", "우유", "계란", "밀", "콩", "조개류", "생선", "없음"],
    },
    Question::Select {
        field: ScalarField::SpiceTolerance,
        label: "매운맛 선호도",
        options: &[
            ("none", "못 먹음"),
            ("mild", "약간 매운맛"),
            ("medium", "중간 매운맛"),
            ("hot", "매운맛"),
            ("very_hot", "아주 매운맛"),
        ],
    },
];

const COOKING_EXPERIENCE: &[Question] = &[
    Question::Select {
        field: ScalarField::CookingExperience,
        label: "요리 경험",
        options: &[("beginner", "초보자"), ("intermediate", "중급자"), ("advanced", "고급자"), ("expert", "전문가")],
    },
    Question::Select {
        field: ScalarField::CookingFrequency,
        label: "요리 빈도",
        options: &[("daily", "매일"), ("few_times_week", "주 3-4회"), ("weekly", "주 1-2회"), ("rarely", "거의 안함")],
    },
    Question::Checklist {
        field: ListField::AvailableEquipment,
        label: "보유 주방 기구",
        options: &["오븐", "전자레인지", "에어프라이어", "믹서기", "압력솥", "찜기"],
    },
];

// ========================
// Wizard State
// ========================

/// Result of pressing "next"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(SurveyStep),
    /// Already on the last step; the caller should submit
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyWizard {
    step: SurveyStep,
    draft: SurveyDraft,
}

impl SurveyWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SurveyStep {
        self.step
    }

    pub fn draft(&self) -> &SurveyDraft {
        &self.draft
    }

    pub fn next(&mut self) -> Advance {
        match SurveyStep::from_index(self.step.index() + 1) {
            Some(step) => {
                self.step = step;
                Advance::Moved(step)
            }
            None => Advance::Submit,
        }
    }

    /// No-op on the first step
    pub fn previous(&mut self) {
        if let Some(step) = self.step.index().checked_sub(1).and_then(SurveyStep::from_index) {
            self.step = step;
        }
    }

    pub fn set_field(&mut self, field: ScalarField, value: &str) {
        self.draft.set_field(field, value);
    }

    pub fn toggle_list_field(&mut self, field: ListField, value: &str) {
        self.draft.toggle(field, value);
    }

    /// Snapshot of the draft if it can be submitted
    pub fn validate(&self) -> Result<SurveyDraft, ValidationError> {
        let missing = self.draft.missing_required();
        if missing.is_empty() {
            Ok(self.draft.clone())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Progress bar width in percent; the current step counts as reached
    pub fn progress_percent(&self) -> f64 {
        (self.step.index() + 1) as f64 / SurveyStep::ALL.len() as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Failed(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(e) => e.user_message(),
            SubmitError::InFlight => "처리중입니다. 잠시만 기다려주세요.".to_string(),
            SubmitError::Failed(e) => e.user_message("설문 제출에 실패했습니다. 다시 시도해주세요."),
        }
    }
}

/// Validate and submit the wizard's draft, returning the new survey id.
///
/// The wizard is reset only on success; on any error the draft and step
/// are left as they were so the user can retry.
pub async fn submit_survey(wizard: &ArcRwSignal<SurveyWizard>, store: &SurveyStore) -> Result<String, SubmitError> {
    let draft = wizard.with_untracked(SurveyWizard::validate)?;
    if store.is_submitting() {
        return Err(SubmitError::InFlight);
    }

    let id = store.submit_survey(&draft).await?;
    wizard.set(SurveyWizard::new());
    Ok(id)
}
