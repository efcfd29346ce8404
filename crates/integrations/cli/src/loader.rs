use anyhow::{anyhow, Context, Result};
use config::MacroConfig;
use handlers::HandlerFactory;
use log::info;
use macro_engine::{Dispatcher, EvdevTranslator, Expression, Translator};
use std::sync::Arc;

pub fn translator_for(config: &MacroConfig) -> Result<Arc<dyn Translator>> {
    let namespace = config.namespace()?;
    Ok(Arc::new(EvdevTranslator::new(namespace)))
}

fn resolve_key(translator: &dyn Translator, role: &str, name: &str) -> Result<u16> {
    translator
        .resolve(name)
        .ok_or_else(|| anyhow!("Unknown {} key {:?}", role, name))
}

/// Compiles every binding of `scheme` into a dispatcher. Any bad pattern,
/// handler kind or parameter fails the whole load.
pub fn build_dispatcher(config: &MacroConfig, scheme: &str) -> Result<Dispatcher> {
    let translator = translator_for(config)?;
    let reset_code = resolve_key(translator.as_ref(), "reset", config.reset_key())?;
    let terminator = resolve_key(translator.as_ref(), "wildcard", config.wildcard_key())?;

    let mut dispatcher = Dispatcher::new(Expression::reset(reset_code, translator.clone()));

    for spec in config.bindings(scheme)? {
        let factory = HandlerFactory::new(&spec.handler, spec.params.clone())
            .with_context(|| format!("Invalid handler header for pattern {:?}", spec.pattern))?;

        let expression = Expression::new(&spec.pattern, terminator, translator.clone())
            .with_context(|| format!("Invalid pattern {:?}", spec.pattern))?;

        let handler = factory
            .build(&spec.command)
            .with_context(|| format!("Invalid command for pattern {:?}", spec.pattern))?;

        dispatcher.add_binding(expression, handler);
    }

    info!(
        "Loaded {} bindings from scheme {:?} (reset: {}, wildcard terminator: {})",
        dispatcher.binding_count(),
        scheme,
        config.reset_key(),
        config.wildcard_key()
    );

    Ok(dispatcher)
}
