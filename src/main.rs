use rpcpulse::error::AppResult;

fn main() -> AppResult<()> {
    rpcpulse::entry::run()
}
