use crate::domain::{ChatTurn, format_chat_history};

const VIDEO_CHAT_TEMPLATE: &str = "\
You are a helpful AI assistant that answers questions about videos and takes into account any additional context provided about the user.

Important Instructions:
1. First, check if the question can be answered using the additional context about the user
2. Then, consider the video description for recipe-related information
3. Combine both sources of information when relevant
4. If you find relevant information in the additional context, explicitly mention it in your response

Video Description: {video_description}
User Context: {additional_context}

Chat History:
{chat_history}

Current Question: {question}

Answer:";

pub fn build_prompt(
    video_description: &str,
    additional_context: &str,
    chat_history: &[ChatTurn],
    question: &str,
) -> String {
    let chat_history = format_chat_history(chat_history);
    render(
        VIDEO_CHAT_TEMPLATE,
        &[
            ("video_description", video_description),
            ("additional_context", additional_context),
            ("chat_history", &chat_history),
            ("question", question),
        ],
    )
}

/// Single-pass substitution: placeholder text inside a value is never expanded again.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substituted = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match substituted {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}
