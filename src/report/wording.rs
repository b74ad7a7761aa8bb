//! Report phrasing per language

use super::diagnosis::{FeedbackPhase, Trend};
use crate::core::types::Language;

pub fn prefix(language: Language) -> &'static str {
    match language {
        Language::English => "Diagnostic report: ",
        Language::Chinese => "AI分析报告：",
    }
}

/// Text placed between the trend and feedback clauses
pub fn clause_separator(language: Language) -> &'static str {
    match language {
        Language::English => " ",
        Language::Chinese => "",
    }
}

/// Shown while no tick has been diagnosed yet
pub fn placeholder(language: Language) -> &'static str {
    match language {
        Language::English => "Waiting for data changes to generate a diagnosis...",
        Language::Chinese => "AI正在等待数据变化以生成诊断...",
    }
}

pub fn trend_clause(trend: Trend, language: Language) -> &'static str {
    match (language, trend) {
        (Language::English, Trend::Rising) => {
            "Cold stimulus increases upstream and intermediate regulator activity, raising effector hormone output."
        }
        (Language::English, Trend::Falling) => {
            "Heat stimulus suppresses upstream regulator activity, lowering effector hormone output and the metabolic rate."
        }
        (Language::English, Trend::Steady) => {
            "Under normal conditions, hormone levels are maintained near homeostasis."
        }
        (Language::Chinese, Trend::Rising) => "寒冷刺激增强下丘脑和垂体活动，促使靶腺激素分泌升高。",
        (Language::Chinese, Trend::Falling) => "炎热刺激抑制下丘脑活动，激素分泌下降，降低代谢速率。",
        (Language::Chinese, Trend::Steady) => "在正常条件下，激素水平维持在稳态附近波动。",
    }
}

pub fn feedback_clause(phase: FeedbackPhase, language: Language) -> &'static str {
    match (language, phase) {
        (Language::English, FeedbackPhase::Inhibitory) => {
            "Effector hormone level is elevated; negative feedback inhibits upstream and intermediate secretion."
        }
        (Language::English, FeedbackPhase::Stimulatory) => {
            "Effector hormone level is depressed; feedback stimulates upstream secretion."
        }
        (Language::English, FeedbackPhase::Balanced) => {
            "Feedback is maintaining balance."
        }
        (Language::Chinese, FeedbackPhase::Inhibitory) => "靶腺激素水平偏高，反馈抑制下丘脑与垂体分泌。",
        (Language::Chinese, FeedbackPhase::Stimulatory) => "靶腺激素水平偏低，反馈促进上游激素分泌。",
        (Language::Chinese, FeedbackPhase::Balanced) => "反馈作用维持平衡状态。",
    }
}
