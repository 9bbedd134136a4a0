use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;

use cloudwatch_mackerel_relay::{
    logging, AlarmRelay, Config, MackerelSink, ReportSink, SnsEnvelope, Translator,
};

async fn function_handler<S: ReportSink>(
    relay: &AlarmRelay<S>,
    event: LambdaEvent<SnsEnvelope>,
) -> Result<(), Error> {
    let (envelope, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        records = envelope.len(),
        "handling SNS event"
    );
    relay.handle(envelope).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    // Missing configuration aborts before the first event is accepted.
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    let sink = MackerelSink::new(&config.mackerel)?;
    let relay = AlarmRelay::new(Translator::new(config.host_id), sink);
    let relay = &relay;

    run(service_fn(move |event: LambdaEvent<SnsEnvelope>| async move {
        function_handler(relay, event).await
    }))
    .await
}
