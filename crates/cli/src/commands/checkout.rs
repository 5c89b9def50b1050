use crate::commands::session::with_storefront;
use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    with_storefront("checkout", |storefront| async move {
        let notice = storefront.checkout();
        CommandResult::success_with_data("checkout", notice.message.clone(), notice)
    })
}
