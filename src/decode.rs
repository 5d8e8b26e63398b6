use crate::{wire, CodegenError, Completion, Usage};

pub(crate) fn decode_completion(
    response: wire::ChatResponse,
) -> Result<Completion, CodegenError> {
    let model = response.model;
    let usage = response.usage.map(decode_usage);

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CodegenError::NoCompletion("response contained no choices".to_owned()))?;

    let message = choice.message.ok_or_else(|| {
        CodegenError::NoCompletion(format!("choice {} carried no message", choice.index))
    })?;

    let content = message
        .content
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            CodegenError::NoCompletion(format!(
                "choice {} message carried no content",
                choice.index
            ))
        })?;

    Ok(Completion {
        content,
        finish_reason: choice.finish_reason,
        model,
        usage,
    })
}

fn decode_usage(usage: wire::Usage) -> Usage {
    Usage {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    }
}
