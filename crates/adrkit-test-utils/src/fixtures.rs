//! Annotated source fixtures.

use adrkit_types::{DecisionRecord, LocatedRecord, SourceLocation};

/// A short JavaScript file with one decision block and some logger setup.
pub const EXAMPLE_JS: &str = "\
// @decision.id: adr-1
// @decision.name: Using Pino for logging
// @decision.status: accepted
// @decision.category: infrastructure
// @decision.context: We needed structured logging with low overhead
//   for our high-throughput API. After benchmarking several options,
//   Pino provided the best performance characteristics.
// @decision.decision: Adopt Pino as the standard logging library
//   across all Node.js services.
// @decision.consequences: All services must migrate from Winston.
//   We gain 3-5x better logging performance.

const pino = require('pino');
const logger = pino();

logger.info('Application started');
";

/// A longer variant of [`EXAMPLE_JS`] describing the same decision.
pub const INTEGRATION_JS: &str = "\
// @decision.id: adr-1
// @decision.name: Using Pino for logging
// @decision.status: accepted
// @decision.category: infrastructure
// @decision.context: We needed structured logging with low overhead
//   for our high-throughput API. After benchmarking Winston, Bunyan,
//   and Pino, we found that Pino provided the best performance
//   characteristics with the lowest memory overhead.
// @decision.decision: Adopt Pino as the standard logging library
//   across all Node.js services. All new services must use Pino,
//   and existing services should migrate during their next major version.
// @decision.consequences: All services must migrate from Winston.
//   We gain 3-5x better logging performance but lose some
//   Winston-specific plugins. Team needs training on Pino's API.

const pino = require('pino');
const logger = pino({
  level: process.env.LOG_LEVEL || 'info'
});

module.exports = logger;
";

/// A Python file using `#` comments.
pub const EXAMPLE_PY: &str = "\
# @decision.id: adr-2
# @decision.name: Use Celery for background jobs
# @decision.status: proposed
# @decision.category: infrastructure
# @decision.context: Report generation blocks web workers
#   for up to a minute.

from celery import Celery

app = Celery('reports')
";

/// Joined context of the record in [`EXAMPLE_JS`].
pub const EXAMPLE_JS_CONTEXT: &str = "We needed structured logging with low overhead \
for our high-throughput API. After benchmarking several options, \
Pino provided the best performance characteristics.";

/// Joined decision of the record in [`EXAMPLE_JS`].
pub const EXAMPLE_JS_DECISION: &str =
    "Adopt Pino as the standard logging library across all Node.js services.";

/// Joined consequences of the record in [`EXAMPLE_JS`].
pub const EXAMPLE_JS_CONSEQUENCES: &str =
    "All services must migrate from Winston. We gain 3-5x better logging performance.";

/// The record [`EXAMPLE_JS`] is expected to produce.
pub fn example_js_record() -> DecisionRecord {
    DecisionRecord {
        id: "adr-1".to_string(),
        name: "Using Pino for logging".to_string(),
        status: "accepted".to_string(),
        category: "infrastructure".to_string(),
        context: EXAMPLE_JS_CONTEXT.to_string(),
        decision: EXAMPLE_JS_DECISION.to_string(),
        consequences: EXAMPLE_JS_CONSEQUENCES.to_string(),
    }
}

/// A record with id and name set.
pub fn named_record(id: &str, name: &str) -> DecisionRecord {
    DecisionRecord {
        name: name.to_string(),
        ..DecisionRecord::new(id)
    }
}

/// Attach a location to a record.
pub fn located(record: DecisionRecord, file: &str, line: usize) -> LocatedRecord {
    LocatedRecord::new(record, SourceLocation::new(file, line))
}
