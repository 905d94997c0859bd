//! Prompt assembly for compaction and suggestion requests

use crate::capture::RawContext;

/// System instruction for the compaction request.
pub const COMPACTOR_SYSTEM: &str = "You are the 'Context Compactor' agent. Your task is to \
analyze the provided raw JSON data representing a user's paused work state. You must generate \
a concise, action-oriented Markdown summary that focuses ONLY on the most relevant active \
windows/files and synthesizes the key discussion points from the Slack messages. The goal is \
to eliminate cognitive load when the user resumes the task.";

/// System instruction for the next-step suggestion request.
pub const SUGGESTOR_SYSTEM: &str = "You are the 'Next Step Suggestor' agent. Analyze the \
provided context, focusing on active windows and recent communication snippets. Your single \
output must be the most logical, high-priority next action item for the user to resume their \
work. DO NOT use Markdown formatting; provide only the suggested sentence.";

/// User prompt for compacting a paused context into a recall note.
pub fn compaction_prompt(context: &RawContext, next_step: &str) -> String {
    format!(
        "The user has paused the task: {}\n\
         The user's ABSOLUTE NEXT STEP is: '{}'\n\n\
         Here is the raw context data captured from their system and communication tools:\n\
         --- RAW CONTEXT ---\n\
         {}\n\
         -------------------\n\n\
         Please provide the final summary in a single Markdown block.",
        context.project_name,
        next_step,
        context.to_pretty_json()
    )
}

/// User prompt for generating a suggested next step.
pub fn suggestion_prompt(context: &RawContext) -> String {
    format!(
        "Here is the user's paused context:\n\
         --- RAW CONTEXT ---\n\
         {}\n\
         -------------------\n\n\
         Generate a single, direct, actionable sentence for the user's 'Absolute Next Step'.",
        context.to_pretty_json()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::ChannelMessage;

    fn context() -> RawContext {
        let mut context = RawContext::new("Demo");
        context.active_windows.push("Editor".to_string());
        context.slack_messages.push(ChannelMessage {
            user_id: "U1".to_string(),
            text: "deploy is blocked".to_string(),
            timestamp: "1.0".to_string(),
        });
        context
    }

    #[test]
    fn compaction_prompt_embeds_task_step_and_data() {
        let prompt = compaction_prompt(&context(), "fix the deploy script");

        assert!(prompt.contains("The user has paused the task: Demo"));
        assert!(prompt.contains("ABSOLUTE NEXT STEP is: 'fix the deploy script'"));
        assert!(prompt.contains("--- RAW CONTEXT ---"));
        assert!(prompt.contains("deploy is blocked"));
        assert!(prompt.ends_with("single Markdown block."));
    }

    #[test]
    fn suggestion_prompt_embeds_the_context_json() {
        let prompt = suggestion_prompt(&context());

        assert!(prompt.starts_with("Here is the user's paused context:"));
        assert!(prompt.contains("\"active_windows\""));
        assert!(prompt.contains("'Absolute Next Step'"));
    }
}
