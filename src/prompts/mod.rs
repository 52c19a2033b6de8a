//! Prompt construction for FS generation
//!
//! Templates are static strings selected by module category. Formatting is a
//! literal, global replace of the placeholder tokens; nothing is escaped or
//! interpreted.

pub mod templates;

pub use templates::{COMMON_TEMPLATE, MM_TEMPLATE, PM_TEMPLATE, PP_TEMPLATE};

use serde::Serialize;

/// Persona used when a caller passes no system prompt
pub const DEFAULT_PERSONA: &str = "你是一位资深的 SAP 顾问，擅长编写功能说明书。";

/// System prompt sent with every FS generation request
pub const DEFAULT_SYSTEM_PROMPT: &str = "你是 SAP S/4HANA 功能说明书 (Functional Specification) 专家。
请根据用户输入的业务需求，生成结构化的 FS 文档，包含：
1. 文档信息（标题、版本、日期）
2. 业务背景与目标
3. 需求描述
4. 功能范围与边界
5. 业务流程图（文字描述）
6. 详细功能描述
7. 数据字典（关键表字段）
8. 权限与安全
9. 测试要点
10. 风险与假设

请使用专业的 SAP 顾问语言，输出完整的 Markdown 格式文档。";

/// Substituted for `{reference_text}` when the caller gives no reference
pub const NO_REFERENCE_TEXT: &str = "无参考文档，请使用标准 FS 格式。";

/// Known complexity levels
pub const COMPLEXITY_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

/// SAP module category selecting the prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleCategory {
    Mm,
    Pp,
    Pm,
    Common,
}

impl ModuleCategory {
    pub const ALL: [ModuleCategory; 4] = [
        ModuleCategory::Mm,
        ModuleCategory::Pp,
        ModuleCategory::Pm,
        ModuleCategory::Common,
    ];

    /// Resolve a label; unknown labels (including empty) map to `Common`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "MM (物料管理)" => ModuleCategory::Mm,
            "PP (生产计划)" => ModuleCategory::Pp,
            "PM (工厂维护)" => ModuleCategory::Pm,
            _ => ModuleCategory::Common,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleCategory::Mm => "MM (物料管理)",
            ModuleCategory::Pp => "PP (生产计划)",
            ModuleCategory::Pm => "PM (工厂维护)",
            ModuleCategory::Common => "通用",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            ModuleCategory::Mm => MM_TEMPLATE,
            ModuleCategory::Pp => PP_TEMPLATE,
            ModuleCategory::Pm => PM_TEMPLATE,
            ModuleCategory::Common => COMMON_TEMPLATE,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModuleCategory::Mm => "采购、库存管理、发票校验",
            ModuleCategory::Pp => "生产订单、物料需求计划",
            ModuleCategory::Pm => "设备维护、维护通知、工单",
            ModuleCategory::Common => "跨模块或通用增强需求",
        }
    }
}

/// Values substituted into a template
#[derive(Debug, Clone, Default)]
pub struct PromptVariables {
    pub requirement: String,
    pub complexity: String,
    pub reference_text: String,
}

/// Get the template for a module label.
///
/// Unrecognized labels fall back to the common template rather than failing.
pub fn get_prompt_template(module_type: &str) -> &'static str {
    ModuleCategory::from_label(module_type).template()
}

/// Replace every placeholder occurrence with its value
pub fn format_prompt(template: &str, vars: &PromptVariables) -> String {
    let reference = if vars.reference_text.trim().is_empty() {
        NO_REFERENCE_TEXT
    } else {
        vars.reference_text.as_str()
    };

    template
        .replace("{requirement}", &vars.requirement)
        .replace("{complexity}", &vars.complexity)
        .replace("{reference_text}", reference)
}

/// Short description of a module label, for UI hints
pub fn module_description(module_type: &str) -> &'static str {
    ModuleCategory::from_label(module_type).description()
}

/// Short description of a complexity level; empty for unknown levels
pub fn complexity_description(complexity: &str) -> &'static str {
    match complexity {
        "Low" => "影响范围小，1-2个增强点",
        "Medium" => "中等复杂度，涉及多个表或流程",
        "High" => "高复杂度，跨模块深度集成",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(reference: &str) -> PromptVariables {
        PromptVariables {
            requirement: "PO over threshold triggers approval".to_string(),
            complexity: "Medium".to_string(),
            reference_text: reference.to_string(),
        }
    }

    #[test]
    fn test_known_modules_select_their_template() {
        assert_eq!(get_prompt_template("MM (物料管理)"), MM_TEMPLATE);
        assert_eq!(get_prompt_template("PP (生产计划)"), PP_TEMPLATE);
        assert_eq!(get_prompt_template("PM (工厂维护)"), PM_TEMPLATE);
        assert_eq!(get_prompt_template("通用"), COMMON_TEMPLATE);
    }

    #[test]
    fn test_unknown_module_falls_back_to_common() {
        assert_eq!(get_prompt_template(""), COMMON_TEMPLATE);
        assert_eq!(get_prompt_template("SD (销售与分销)"), COMMON_TEMPLATE);
        assert_eq!(get_prompt_template("mm (物料管理)"), COMMON_TEMPLATE);
    }

    #[test]
    fn test_format_replaces_every_occurrence() {
        let template = "{requirement} / {complexity} / {requirement} / {complexity}";
        let prompt = format_prompt(template, &vars("ref"));
        assert_eq!(
            prompt,
            "PO over threshold triggers approval / Medium / PO over threshold triggers approval / Medium"
        );
    }

    #[test]
    fn test_templates_leave_no_placeholders() {
        for module in ModuleCategory::ALL {
            let prompt = format_prompt(module.template(), &vars("参考"));
            assert!(!prompt.contains("{requirement}"));
            assert!(!prompt.contains("{complexity}"));
            assert!(!prompt.contains("{reference_text}"));
            assert!(prompt.contains("复杂度为 Medium 时"));
        }
    }

    #[test]
    fn test_empty_reference_uses_fallback_sentence() {
        let prompt = format_prompt("参考: {reference_text}", &vars(""));
        assert_eq!(prompt, format!("参考: {}", NO_REFERENCE_TEXT));

        let prompt = format_prompt("参考: {reference_text}", &vars("   "));
        assert_eq!(prompt, format!("参考: {}", NO_REFERENCE_TEXT));
    }

    #[test]
    fn test_reference_text_is_inserted_verbatim() {
        let prompt = format_prompt("参考: {reference_text}", &vars("{complexity}"));
        assert_eq!(prompt, "参考: {complexity}");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(module_description("PM (工厂维护)"), "设备维护、维护通知、工单");
        assert_eq!(module_description("unknown"), "跨模块或通用增强需求");
        assert_eq!(complexity_description("High"), "高复杂度，跨模块深度集成");
        assert_eq!(complexity_description("Extreme"), "");
    }
}
