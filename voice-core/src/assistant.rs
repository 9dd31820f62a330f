//! Inline assistant definitions
//!
//! Builds the design-review assistant: a voice agent whose system prompt
//! carries the current whiteboard design as pretty-printed JSON, plus a
//! function tool that lets it draw on the whiteboard.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DESIGN_ASSISTANT_NAME: &str = "PM Design Assistant (Voice)";

/// Name of the tool the assistant calls to draw on the whiteboard
pub const WHITEBOARD_TOOL: &str = "create_whiteboard_element";

pub const DESIGN_BASE_PROMPT: &str = "You are a voice-based AI assistant for technical \
Product Managers working on complex software systems. Your role is to act as a collaborative \
design partner who helps PMs think through their system architecture, understand trade-offs, \
and make technically sound decisions. You should be highly fluent in backend and frontend \
architecture, cloud infrastructure, databases, caching, CI/CD, observability, and modern \
development practices. You are capable of having deep technical conversations about scaling \
strategies, service boundaries, API design, data models, event-driven systems, and deployment \
trade-offs.\n\n\
Begin the conversation by asking what system or project the PM is currently working on. Then, \
ask smart, targeted follow-up questions to understand the purpose of the system, user flows, \
usage patterns, expected scale, tech constraints, and existing architectural decisions. Do not \
offer suggestions prematurely \u{2014} first gather all necessary context.\n\n\
Once you understand the system in detail, provide thoughtful feedback and suggestions to \
improve scalability, maintainability, cost-efficiency, or reliability. Offer alternatives when \
appropriate (e.g. \"You could use Redis here, or maybe an in-memory cache if latency is \
critical\"). Always back your suggestions with clear reasoning.\n\n\
Your responses should be short, clear, and voice-friendly \u{2014} like you're in a fast-paced \
design meeting. Speak like a confident peer: casual, but never vague. Use real technical \
language when necessary, and never over-explain basic concepts to a technical audience. If the \
PM is uncertain or brainstorming, help them think through their ideas by summarizing, \
reframing, or asking clarifying questions.\n\n\
Avoid going off-topic. Your only job is to help the PM move toward a clearer, more technically \
viable system design. Once the design seems solid or the PM indicates they're done, help \
summarize the architecture and wrap up the conversation naturally. You are sharp, articulate, \
and extremely efficient \u{2014} like a world-class staff engineer who speaks in 30-second bursts.";

/// Model provider and model of the design assistant
pub const DESIGN_MODEL_PROVIDER: &str = "openai";
pub const DESIGN_MODEL: &str = "gpt-4.1";

/// Message in the model's prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcriber {
    pub provider: String,
    pub model: String,
    pub language: String,
}

impl Default for Transcriber {
    fn default() -> Self {
        Self {
            provider: "deepgram".to_string(),
            model: "nova-2".to_string(),
            language: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub provider: String,
    pub voice_id: String,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            provider: "playht".to_string(),
            voice_id: "jennifer".to_string(),
        }
    }
}

/// A function the model may call during the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

impl Tool {
    pub fn function(function: FunctionDefinition) -> Self {
        Self {
            tool_type: "function".to_string(),
            function,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub provider: String,
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

/// Inline assistant definition sent with a call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub name: String,
    pub transcriber: Transcriber,
    pub model: Model,
    pub voice: Voice,
}

/// Appends the current design to a base prompt
pub fn build_system_prompt(base_prompt: &str, design: &Value) -> String {
    let design_pretty = serde_json::to_string_pretty(design).unwrap_or_else(|_| design.to_string());

    format!(
        "{base_prompt}\n\n\
         Here is the CURRENT DESIGN as JSON:\n\
         ```json\n\
         {design_pretty}\n\
         ```\n\
         Please take that into account when asking clarifying questions or suggesting improvements."
    )
}

/// The whiteboard drawing tool
pub fn whiteboard_tool() -> Tool {
    Tool::function(FunctionDefinition {
        name: WHITEBOARD_TOOL.to_string(),
        description: "Draws a UI component on the shared whiteboard".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "component": { "type": "string" },
                "x": { "type": "number" },
                "y": { "type": "number" }
            },
            "required": ["component", "x", "y"]
        }),
    })
}

/// Builds the design-review assistant for the given design document
pub fn design_assistant(design: &Value) -> AssistantConfig {
    AssistantConfig {
        name: DESIGN_ASSISTANT_NAME.to_string(),
        transcriber: Transcriber::default(),
        model: Model {
            provider: DESIGN_MODEL_PROVIDER.to_string(),
            model: DESIGN_MODEL.to_string(),
            messages: vec![Message::system(build_system_prompt(
                DESIGN_BASE_PROMPT,
                design,
            ))],
            tools: vec![whiteboard_tool()],
        },
        voice: Voice::default(),
    }
}
